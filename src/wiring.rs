//! Binds the panel's controls to controller operations.

use crate::api::PanelBackend;
use crate::controller::DashboardController;
use crate::error::PanelError;
use crate::models::{BindingKind, ButtonBinding, StatusMessage, BUTTON_BINDINGS};
use crate::surface::Surface;

/// Controls found on the surface at initialization, keyed by identifier.
#[derive(Clone, Debug, Default)]
pub struct BoundControls {
    bindings: Vec<&'static ButtonBinding>,
}

impl BoundControls {
    pub fn get(&self, id: &str) -> Option<&'static ButtonBinding> {
        self.bindings.iter().copied().find(|b| b.id == id)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.bindings.iter().map(|b| b.id).collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Run the behaviour bound to a control.
    pub async fn click<B: PanelBackend, S: Surface>(
        &self,
        controller: &DashboardController<B, S>,
        id: &str,
    ) -> Result<StatusMessage, PanelError> {
        let binding = self
            .get(id)
            .ok_or_else(|| PanelError::MissingElement(id.to_string()))?;
        tracing::debug!(id, kind = ?binding.kind, "Control clicked");
        Ok(dispatch(controller, binding).await)
    }
}

/// Look up each known control on the surface and bind the ones present.
///
/// Missing controls are logged and skipped.
pub fn initialize<B: PanelBackend, S: Surface>(controller: &DashboardController<B, S>) -> BoundControls {
    let mut bindings = Vec::new();
    for binding in BUTTON_BINDINGS.iter() {
        if controller.surface().contains(binding.id) {
            bindings.push(binding);
        } else {
            tracing::warn!("Button with ID {} not found.", binding.id);
        }
    }
    BoundControls { bindings }
}

/// Behaviour of a single control.
///
/// Start controls issue the trigger and the panel reload together; the reload
/// does not wait for the triggered job.
pub async fn dispatch<B: PanelBackend, S: Surface>(
    controller: &DashboardController<B, S>,
    binding: &ButtonBinding,
) -> StatusMessage {
    match binding.kind {
        BindingKind::Stop => controller.stop_service_and_delete_data(binding.deploy_method).await,
        BindingKind::Start => {
            let (message, ()) = tokio::join!(
                controller.trigger_action(binding.workflow),
                controller.load_service_data(binding.workflow, Some(binding.deploy_method.as_str())),
            );
            message
        }
    }
}

/// Initial load of every panel once the page is ready.
pub async fn on_ready<B: PanelBackend, S: Surface>(controller: &DashboardController<B, S>) {
    controller.load_all().await;
}
