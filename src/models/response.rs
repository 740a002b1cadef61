//! Generic request and response envelopes

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Success body of every mutating endpoint
#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub message: String,
}

/// Answer of the `check_*_exists` endpoints
#[serde_as]
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct ExistsResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub exists: bool,
}

/// Error body the service attaches to non-success responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// Name lookup used by the `find_*_by_name` endpoints and query strings
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NameQuery {
    pub name: String,
}
