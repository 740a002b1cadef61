//! Terminal view port for the command-line front end
//!
//! Field values live in memory and are filled from `field=value` arguments.
//! Rendered markup goes to stdout, notifications to stderr.

use console::style;

use super::{MemoryView, Notice, NoticeKind, ViewPort};

#[derive(Debug, Default)]
pub struct TerminalView {
    inner: MemoryView,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `field=value` assignments; anything without `=` is rejected
    pub fn apply_assignments<'a, I>(&mut self, assignments: I) -> Result<(), String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for assignment in assignments {
            let (id, value) = assignment
                .split_once('=')
                .ok_or_else(|| format!("Expected field=value, got '{}'", assignment))?;
            self.inner.set_field(id.trim(), value);
        }
        Ok(())
    }
}

impl ViewPort for TerminalView {
    fn read_field(&self, id: &str) -> String {
        self.inner.read_field(id)
    }

    fn set_field(&mut self, id: &str, value: &str) {
        tracing::trace!("field {} <- {:?}", id, value);
        self.inner.set_field(id, value);
    }

    fn set_html(&mut self, container_id: &str, html: &str) {
        if !html.is_empty() {
            println!("{}", style(format!("[{}]", container_id)).bold());
            println!("{}", html);
        }
        self.inner.set_html(container_id, html);
    }

    fn notify(&mut self, notice: Notice) {
        let line = match notice.kind {
            NoticeKind::Success => style(notice.text.as_str()).green(),
            NoticeKind::Error => style(notice.text.as_str()).red(),
            NoticeKind::Info => style(notice.text.as_str()),
        };
        eprintln!("{}", line);
        self.inner.notify(notice);
    }
}
