//! Display capabilities the controller writes to.

pub mod page;
pub mod terminal;

pub use page::{Element, Page, STATUS_ELEMENT_ID};
pub use terminal::TerminalSurface;

use crate::models::{RecordTable, StatusMessage};

/// What a container shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Table(RecordTable),
}

impl Content {
    pub fn text(s: impl Into<String>) -> Self {
        Content::Text(s.into())
    }
}

/// Element lookup and replacement on whatever displays the panel.
///
/// Writes always replace an element's full content.
pub trait Surface: Send + Sync {
    /// Whether an element with this identifier exists.
    fn contains(&self, id: &str) -> bool;

    /// Replace a container's content. Unknown identifiers are ignored.
    fn replace(&self, id: &str, content: Content);

    /// Set text and colour of a status element. Unknown identifiers are ignored.
    fn paint_status(&self, id: &str, message: &StatusMessage);

    /// Blocking notice used when no status element exists.
    fn alert(&self, text: &str);
}

impl<S: Surface + ?Sized> Surface for std::sync::Arc<S> {
    fn contains(&self, id: &str) -> bool {
        (**self).contains(id)
    }

    fn replace(&self, id: &str, content: Content) {
        (**self).replace(id, content)
    }

    fn paint_status(&self, id: &str, message: &StatusMessage) {
        (**self).paint_status(id, message)
    }

    fn alert(&self, text: &str) {
        (**self).alert(text)
    }
}
