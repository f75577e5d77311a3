//! Wire types for the extension service API.
//!
//! Field names follow the server's camelCase JSON. Extension identifiers are
//! carried as opaque strings; no validation happens on this side.

use serde::{Deserialize, Serialize};

/// Response from `GET /api/extensions`: the full blocklist state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionList {
    /// Built-in extensions with their current toggle state
    pub fixed_extensions: Vec<FixedExtension>,
    /// User-registered extensions
    pub custom_extensions: Vec<CustomExtension>,
    /// Number of custom extensions currently registered
    pub custom_count: u32,
    /// Server-side cap on custom extensions
    pub max_custom_count: u32,
}

/// A built-in extension that can be toggled on or off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedExtension {
    pub extension: String,
    pub active: bool,
}

/// A user-registered extension entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomExtension {
    pub extension: String,
}

/// Body of `POST /api/extensions/custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCustomRequest {
    pub extension: String,
}

/// Failure body the server attaches to 4xx/5xx responses.
///
/// The client never interprets this; callers that want a readable message can
/// decode it from [`Error::Status`](crate::Error::Status)'s `body` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
