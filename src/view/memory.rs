//! In-memory view port, used by the terminal front end and in tests

use std::collections::HashMap;

use super::{Notice, NoticeKind, ViewPort};

#[derive(Debug, Default, Clone)]
pub struct MemoryView {
    fields: HashMap<String, String>,
    containers: HashMap<String, String>,
    notices: Vec<Notice>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field assignment
    pub fn with_field(mut self, id: &str, value: &str) -> Self {
        self.set_field(id, value);
        self
    }

    /// Markup last rendered into a container, if any
    pub fn html(&self, container_id: &str) -> Option<&str> {
        self.containers.get(container_id).map(String::as_str)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Texts of all notices of one kind, oldest first
    pub fn notices_of(&self, kind: NoticeKind) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.text.as_str())
            .collect()
    }
}

impl ViewPort for MemoryView {
    fn read_field(&self, id: &str) -> String {
        self.fields.get(id).cloned().unwrap_or_default()
    }

    fn set_field(&mut self, id: &str, value: &str) {
        self.fields.insert(id.to_string(), value.to_string());
    }

    fn set_html(&mut self, container_id: &str, html: &str) {
        self.containers
            .insert(container_id.to_string(), html.to_string());
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
