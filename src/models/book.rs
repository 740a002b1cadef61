//! Book payloads exchanged with the library service

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Book record as listed by the service
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub author: String,
    pub year_published: i64,
    /// Numeric book type code
    #[serde(rename = "type")]
    pub book_type: i64,
}

/// Create book request
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub name: String,
    pub author: String,
    pub year_published: i64,
    #[serde(rename = "type")]
    pub book_type: i64,
}

/// Identifies a book by name for remove/restore
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookRef {
    pub book_name: String,
}

/// Existence check for a prospective new book name
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookNameCheck {
    pub new_name: String,
}

/// Update book request.
///
/// String fields are sent as typed (possibly empty); numeric fields that were
/// left blank go out as `null`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdate {
    /// Current name of the book being updated
    pub book_name: String,
    pub new_name: String,
    pub author: String,
    pub year_published: Option<i64>,
    #[serde(rename = "type")]
    pub book_type: Option<i64>,
}

impl BookUpdate {
    /// The existence check to run first, if a new name was supplied
    pub fn rename_check(&self) -> Option<BookNameCheck> {
        (!self.new_name.is_empty()).then(|| BookNameCheck {
            new_name: self.new_name.clone(),
        })
    }
}
