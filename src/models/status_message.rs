use serde::Serialize;

pub const TRIGGER_FAILED: &str = "Something went wrong! Please try again.";
pub const TRIGGER_TRANSPORT_FAILED: &str =
    "Failed to trigger GitHub Action. Please check the console for details.";
pub const STOP_FAILED: &str = "Failed to stop service and delete data.";
pub const STOP_TRANSPORT_FAILED: &str =
    "Failed to stop service and delete data. Please check the console for details.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StatusKind {
    Success,
    Info,
    Error,
}

impl StatusKind {
    /// Only success is painted green; progress notes share the error colour.
    pub fn color(&self) -> &'static str {
        match self {
            StatusKind::Success => "green",
            StatusKind::Info | StatusKind::Error => "red",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Success }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Info }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Error }
    }

    pub fn stopping(deploy_method: &str) -> Self {
        Self::info(format!("Stopping service and deleting {} data...", deploy_method))
    }

    pub fn color(&self) -> &'static str {
        self.kind.color()
    }
}
