use std::collections::HashMap;
use std::sync::Mutex;

use super::{Content, Surface};
use crate::models::{DeployMethod, StatusMessage, BUTTON_BINDINGS};

pub const STATUS_ELEMENT_ID: &str = "status-message";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    Control { label: String },
    Container(Content),
    Status { text: String, color: Option<&'static str> },
}

/// In-memory document backing the web dashboard.
#[derive(Debug, Default)]
pub struct Page {
    elements: Mutex<HashMap<String, Element>>,
    alerts: Mutex<Vec<String>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard layout: every bound control, one container per deploy method, a status line.
    pub fn dashboard() -> Self {
        let mut page = Self::new();
        for binding in BUTTON_BINDINGS.iter() {
            page = page.with_control(binding.id, binding.label());
        }
        for method in DeployMethod::ALL {
            page = page.with_container(method.container_id());
        }
        page.with_status()
    }

    pub fn with_control(self, id: &str, label: impl Into<String>) -> Self {
        self.insert(id, Element::Control { label: label.into() })
    }

    pub fn with_container(self, id: &str) -> Self {
        self.insert(id, Element::Container(Content::text("")))
    }

    pub fn with_status(self) -> Self {
        self.insert(
            STATUS_ELEMENT_ID,
            Element::Status {
                text: String::new(),
                color: None,
            },
        )
    }

    fn insert(self, id: &str, element: Element) -> Self {
        self.elements.lock().unwrap().insert(id.to_string(), element);
        self
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.elements.lock().unwrap().get(id).cloned()
    }

    /// Current content of a container, `None` if `id` is not a container.
    pub fn content(&self, id: &str) -> Option<Content> {
        match self.element(id)? {
            Element::Container(content) => Some(content),
            _ => None,
        }
    }

    /// Text and colour of the status line, if the page has one.
    pub fn status(&self) -> Option<(String, Option<&'static str>)> {
        match self.element(STATUS_ELEMENT_ID)? {
            Element::Status { text, color } => Some((text, color)),
            _ => None,
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    /// Drain alerts once they have been shown.
    pub fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut *self.alerts.lock().unwrap())
    }

    /// Copy of every element, for comparing page states.
    pub fn snapshot(&self) -> HashMap<String, Element> {
        self.elements.lock().unwrap().clone()
    }
}

impl Surface for Page {
    fn contains(&self, id: &str) -> bool {
        self.elements.lock().unwrap().contains_key(id)
    }

    fn replace(&self, id: &str, content: Content) {
        let mut elements = self.elements.lock().unwrap();
        if let Some(element) = elements.get_mut(id) {
            *element = Element::Container(content);
        }
    }

    fn paint_status(&self, id: &str, message: &StatusMessage) {
        let mut elements = self.elements.lock().unwrap();
        if let Some(element) = elements.get_mut(id) {
            *element = Element::Status {
                text: message.text.clone(),
                color: Some(message.color()),
            };
        }
    }

    fn alert(&self, text: &str) {
        tracing::info!(text, "Alert raised");
        self.alerts.lock().unwrap().push(text.to_string());
    }
}
