use askama::Template;

use super::views::{control_views, panel_views, status_view, ControlView, PanelView, StatusView};
use crate::surface::Page;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub backend_host: String,
    pub alerts: Vec<String>,
    pub controls: Vec<ControlView>,
    pub status: Option<StatusView>,
    pub panels: Vec<PanelView>,
}

impl DashboardTemplate {
    /// Snapshot the page for rendering. Pending alerts are consumed.
    pub fn from_page(page: &Page, backend_host: String) -> Self {
        Self {
            backend_host,
            alerts: page.take_alerts(),
            controls: control_views(page),
            status: status_view(page),
            panels: panel_views(page),
        }
    }
}
