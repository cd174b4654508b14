use crate::models::{DeployMethod, RecordTable};
use crate::surface::{Content, Element, Page};

pub struct ControlView {
    pub id: String,
    pub label: String,
}

pub struct StatusView {
    pub text: String,
    pub color: Option<&'static str>,
}

/// One deploy method's container as the templates see it.
pub struct PanelView {
    pub title: String,
    pub container_id: String,
    pub text: String,
    pub table: Option<RecordTable>,
}

impl PanelView {
    pub fn from_page(page: &Page, method: DeployMethod) -> Option<Self> {
        let content = page.content(method.container_id())?;
        let (text, table) = match content {
            Content::Text(text) => (text, None),
            Content::Table(table) => (String::new(), Some(table)),
        };
        Some(Self {
            title: method.as_str().to_string(),
            container_id: method.container_id().to_string(),
            text,
            table,
        })
    }
}

/// Controls in binding order, skipping any the page does not carry.
pub fn control_views(page: &Page) -> Vec<ControlView> {
    crate::models::BUTTON_BINDINGS
        .iter()
        .filter_map(|b| match page.element(b.id)? {
            Element::Control { label } => Some(ControlView {
                id: b.id.to_string(),
                label,
            }),
            _ => None,
        })
        .collect()
}

pub fn status_view(page: &Page) -> Option<StatusView> {
    let (text, color) = page.status()?;
    Some(StatusView { text, color })
}

pub fn panel_views(page: &Page) -> Vec<PanelView> {
    DeployMethod::ALL
        .into_iter()
        .filter_map(|m| PanelView::from_page(page, m))
        .collect()
}
