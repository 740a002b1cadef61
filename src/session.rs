//! Per-session memory of which one-time notices were already shown
//!
//! A set starts empty when a session (one desk) is created, each category is
//! inserted at most once, and nothing is ever removed. It only affects how
//! noisy the notifications are, never what requests are sent.

use std::collections::HashSet;

/// Categories that carry a once-per-session notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeCategory {
    Books,
    Customers,
}

#[derive(Debug, Default, Clone)]
pub struct ShownNotices {
    shown: HashSet<NoticeCategory>,
}

impl ShownNotices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the category as shown. Returns `true` only the first time.
    pub fn first_time(&mut self, category: NoticeCategory) -> bool {
        self.shown.insert(category)
    }

    pub fn was_shown(&self, category: NoticeCategory) -> bool {
        self.shown.contains(&category)
    }
}
