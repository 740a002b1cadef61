//! The page the desk talks to: named input fields, result containers and a
//! notification surface.
//!
//! Actions depend only on [`ViewPort`], never on a concrete UI.

pub mod memory;
pub mod terminal;

pub use memory::MemoryView;
pub use terminal::TerminalView;

/// Visual style of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A transient on-screen message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }
}

pub trait ViewPort {
    /// Current raw value of a named input field; empty when the field is unset
    fn read_field(&self, id: &str) -> String;

    fn set_field(&mut self, id: &str, value: &str);

    /// Replace the markup of a result container
    fn set_html(&mut self, container_id: &str, html: &str);

    fn notify(&mut self, notice: Notice);

    fn clear_field(&mut self, id: &str) {
        self.set_field(id, "");
    }

    fn clear_html(&mut self, container_id: &str) {
        self.set_html(container_id, "");
    }

    /// Render `items` as a `<ul>` list, one `template` fragment per item
    fn render_list<T, F>(&mut self, container_id: &str, items: &[T], template: F)
    where
        Self: Sized,
        F: Fn(&T) -> String,
    {
        let body: String = items.iter().map(template).collect();
        self.set_html(container_id, &format!("<ul>{}</ul>", body));
    }
}
