use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
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

/// Query parameters accepted by the business routes. The optional `test`
/// value selects which status code the handler produces.
#[derive(Debug, Deserialize)]
pub struct TriggerQuery {
    pub test: Option<String>,
}
