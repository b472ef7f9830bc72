//! Stripe wire shapes the adapter needs to look inside.
//!
//! Success bodies stay opaque `serde_json::Value`s; only the error body and
//! the list wrapper are decoded.

use serde::Deserialize;
use serde_json::Value;

/// Body of every non-2xx Stripe response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// `{"object": "list", "data": [...], "has_more": bool}`
#[derive(Debug, Deserialize)]
pub(crate) struct List {
    pub data: Vec<Value>,
    #[serde(default)]
    pub has_more: bool,
}
