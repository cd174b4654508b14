// URL handling utilities
pub mod url_parser;

// JSON utilities
pub mod json_converter;

pub use json_converter::{cell_text, reply_message};
pub use url_parser::hostname_from_url;
