pub mod app_state;
pub mod button_binding;
pub mod deploy_method;
pub mod service_record;
pub mod status_message;

pub use button_binding::{find_binding, is_stop_identifier, BindingKind, ButtonBinding, BUTTON_BINDINGS};
pub use deploy_method::DeployMethod;
pub use service_record::{RecordTable, ServiceRecord, TABLE_HEADERS};
pub use status_message::{StatusKind, StatusMessage};
pub use app_state::{AppState, PanelController, SharedBackend};
