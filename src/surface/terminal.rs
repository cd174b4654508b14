use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use yansi::{Color, Paint};

use super::{Content, Surface, STATUS_ELEMENT_ID};
use crate::controller::LOADING_TEXT;
use crate::models::{DeployMethod, RecordTable, StatusMessage, BUTTON_BINDINGS};

/// Prints panel updates to stdout instead of keeping a document.
#[derive(Clone, Debug, Default)]
pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        Self
    }

    fn heading(id: &str) -> String {
        DeployMethod::ALL
            .iter()
            .find(|m| m.container_id() == id)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| id.to_string())
    }
}

pub fn build_table(records: &RecordTable) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(records.headers.clone());
    for row in &records.rows {
        table.add_row(row.clone());
    }
    table
}

/// Same colour rule as the web status line.
pub fn status_color(message: &StatusMessage) -> Color {
    match message.color() {
        "green" => Color::Green,
        _ => Color::Red,
    }
}

impl Surface for TerminalSurface {
    fn contains(&self, id: &str) -> bool {
        id == STATUS_ELEMENT_ID
            || DeployMethod::ALL.iter().any(|m| m.container_id() == id)
            || BUTTON_BINDINGS.iter().any(|b| b.id == id)
    }

    fn replace(&self, id: &str, content: Content) {
        let heading = Paint::new(Self::heading(id)).bold();
        match content {
            Content::Text(text) if text == LOADING_TEXT => {
                println!("{} {}", heading, Paint::new(text).dim());
            }
            Content::Text(text) => println!("{}\n{}", heading, text),
            Content::Table(records) => println!("{}\n{}", heading, build_table(&records)),
        }
    }

    fn paint_status(&self, _id: &str, message: &StatusMessage) {
        println!("{}", Paint::new(&message.text).fg(status_color(message)));
    }

    fn alert(&self, text: &str) {
        eprintln!("{}", Paint::new(text).bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_panel_elements() {
        let surface = TerminalSurface::new();
        assert!(surface.contains(STATUS_ELEMENT_ID));
        assert!(surface.contains("DB-service-data-container"));
        assert!(surface.contains("K8sStop_Button"));
        assert!(!surface.contains("Other-service-data-container"));
    }

    #[test]
    fn test_status_color_matches_page_rule() {
        assert_eq!(status_color(&StatusMessage::success("done")), Color::Green);
        assert_eq!(status_color(&StatusMessage::stopping("Web")), Color::Red);
        assert_eq!(status_color(&StatusMessage::error("failed")), Color::Red);
    }

    #[test]
    fn test_heading_uses_method_name() {
        assert_eq!(TerminalSurface::heading("LB-service-data-container"), "Loadbalance");
        assert_eq!(TerminalSurface::heading("custom"), "custom");
    }
}
