pub mod dashboard;
pub mod helpers;
