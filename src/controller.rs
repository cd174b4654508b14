//! Dashboard controller: trigger, stop and load operations over a backend and a surface.

use futures_util::future::join_all;

use crate::api::PanelBackend;
use crate::models::status_message::{STOP_FAILED, STOP_TRANSPORT_FAILED, TRIGGER_FAILED, TRIGGER_TRANSPORT_FAILED};
use crate::models::{DeployMethod, RecordTable, StatusMessage};
use crate::surface::{Content, Surface, STATUS_ELEMENT_ID};
use crate::utils::reply_message;

pub const LOADING_TEXT: &str = "Loading VM data...";
pub const NO_DATA_TEXT: &str = "No VM data available";
pub const LOAD_FAILED_TEXT: &str = "Failed to load VM data.";

pub struct DashboardController<B, S> {
    backend: B,
    surface: S,
}

impl<B: PanelBackend, S: Surface> DashboardController<B, S> {
    pub fn new(backend: B, surface: S) -> Self {
        Self { backend, surface }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Show a message in the status element, or raise it as an alert when the page has none.
    pub fn show_status(&self, message: &StatusMessage) {
        if self.surface.contains(STATUS_ELEMENT_ID) {
            self.surface.paint_status(STATUS_ELEMENT_ID, message);
        } else {
            self.surface.alert(&message.text);
        }
    }

    /// Start a workflow and report the backend's answer.
    pub async fn trigger_action(&self, workflow: &str) -> StatusMessage {
        let message = match self.backend.trigger_workflow(workflow).await {
            Ok(reply) => match reply_message(&reply) {
                Some(text) => StatusMessage::success(text),
                None => StatusMessage::error(TRIGGER_FAILED),
            },
            Err(e) => {
                tracing::error!(%e, workflow, "Failed to trigger workflow");
                StatusMessage::error(TRIGGER_TRANSPORT_FAILED)
            }
        };
        self.show_status(&message);
        message
    }

    /// Stop one deploy method's services, then reload every panel.
    pub async fn stop_service_and_delete_data(&self, deploy_method: DeployMethod) -> StatusMessage {
        self.show_status(&StatusMessage::stopping(deploy_method.as_str()));

        let message = match self.backend.stop_service(deploy_method).await {
            Ok(reply) => match reply_message(&reply) {
                Some(text) => StatusMessage::success(text),
                None => StatusMessage::error(STOP_FAILED),
            },
            Err(e) => {
                tracing::error!(%e, %deploy_method, "Failed to stop service");
                StatusMessage::error(STOP_TRANSPORT_FAILED)
            }
        };
        self.show_status(&message);

        self.load_all().await;
        message
    }

    /// Reload all four panels concurrently.
    pub async fn load_all(&self) {
        join_all(
            DeployMethod::ALL
                .iter()
                .map(|m| self.load_service_data(m.default_workflow(), Some(m.as_str()))),
        )
        .await;
    }

    /// Fetch a workflow's records and render them into the deploy method's container.
    pub async fn load_service_data(&self, workflow: &str, deploy_method: Option<&str>) {
        let method = match deploy_method.map(str::parse::<DeployMethod>) {
            Some(Ok(method)) => method,
            _ => {
                tracing::warn!(?deploy_method, "Unknown deploy method");
                return;
            }
        };

        let container = method.container_id();
        if !self.surface.contains(container) {
            return;
        }

        self.surface.replace(container, Content::text(LOADING_TEXT));

        let content = match self.backend.vm_data(workflow, Some(method.as_str())).await {
            Ok(records) if !records.is_empty() => Content::Table(RecordTable::from_records(&records)),
            Ok(_) => Content::text(NO_DATA_TEXT),
            Err(e) => {
                tracing::error!(%e, workflow, %method, "Error loading VM data");
                Content::text(LOAD_FAILED_TEXT)
            }
        };
        self.surface.replace(container, content);
    }
}
