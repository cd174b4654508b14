pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod surface;
pub mod templates;
pub mod utils;
pub mod wiring;

pub use controller::DashboardController;
pub use error::PanelError;
