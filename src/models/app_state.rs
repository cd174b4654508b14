use std::sync::Arc;

use crate::api::PanelBackend;
use crate::controller::DashboardController;
use crate::surface::Page;
use crate::wiring::BoundControls;

pub type SharedBackend = Arc<dyn PanelBackend>;
pub type PanelController = DashboardController<SharedBackend, Arc<Page>>;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<PanelController>,
    pub controls: Arc<BoundControls>,
    /// Shown in the page header.
    pub backend_host: String,
}

impl AppState {
    /// Build the dashboard page around `backend` and bind its controls.
    pub fn new(backend: SharedBackend, backend_host: String) -> Self {
        let controller = DashboardController::new(backend, Arc::new(Page::dashboard()));
        let controls = crate::wiring::initialize(&controller);
        Self {
            controller: Arc::new(controller),
            controls: Arc::new(controls),
            backend_host,
        }
    }

    pub fn page(&self) -> &Page {
        self.controller.surface()
    }
}
