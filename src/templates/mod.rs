pub mod dashboard_template;
pub mod panel_template;
pub mod views;

pub use dashboard_template::DashboardTemplate;
pub use panel_template::PanelTemplate;
pub use views::{ControlView, PanelView, StatusView};
