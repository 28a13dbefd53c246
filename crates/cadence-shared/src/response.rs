//! Error body returned by every failing API call.

use serde::{Deserialize, Serialize};

/// `{ "error": "<message>" }` - the only error shape clients see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
