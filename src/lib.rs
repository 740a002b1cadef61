//! Library Desk
//!
//! Front desk client for the library management REST service: reads named
//! form fields, validates them, calls the service and renders the answers as
//! HTML fragments and notifications.

pub mod actions;
pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod forms;
pub mod models;
pub mod render;
pub mod session;
pub mod view;

pub use actions::{Action, Desk, Outcome};
pub use api::ApiClient;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use view::{MemoryView, Notice, NoticeKind, TerminalView, ViewPort};
