//! Data Transfer Objects - request payloads accepted by the server.

use serde::{Deserialize, Serialize};

/// The new/edit post form as submitted by the browser (`application/x-www-form-urlencoded`).
///
/// Every field defaults to empty so a missing input is reported by validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub img_url: String,
    pub body: String,
    pub csrf_token: String,
}
