pub mod backend;
pub mod client;

pub use backend::{records_from_value, PanelBackend, STOP_ENDPOINT, TRIGGER_ENDPOINT, VM_DATA_ENDPOINT};
pub use client::HttpBackend;
