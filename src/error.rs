/// Error types for the panel
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanelError {
    /// Network or HTTP body failure talking to the backend
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with something that is not JSON
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unknown deploy method: {0}")]
    UnknownDeployMethod(String),

    /// Expected surface element is absent
    #[error("Element not found: {0}")]
    MissingElement(String),
}
