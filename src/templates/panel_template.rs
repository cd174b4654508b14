use askama::Template;

use super::views::PanelView;

/// A single container, served on its own for partial refreshes.
#[derive(Template)]
#[template(path = "panel.html")]
pub struct PanelTemplate {
    pub panel: PanelView,
}
