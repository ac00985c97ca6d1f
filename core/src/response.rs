//! The response contract as plain data.
//!
//! # Design
//! Responders produce `ApiResponse` values — a status code plus a JSON
//! body — without touching any HTTP framework. The host converts them to
//! real responses at a single point, which is also where the JSON content
//! type comes from, so every path through the API carries it. The typed
//! body structs document the wire shapes; tests deserialize into them to
//! catch drift.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::types::TodoId;

/// An API response described as plain data.
///
/// Built by the responders in [`crate::api`]; the host is responsible for
/// turning it into a framework response with a JSON content type.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// 200 response carrying the given body.
    ///
    /// A body that fails to serialize degrades to the generic 500; with the
    /// wire shapes in this crate that path is unreachable, but the fold
    /// keeps response construction total.
    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status: 200, body },
            Err(err) => {
                tracing::error!(error = %err, "response body serialization failed");
                Self::internal_error()
            }
        }
    }

    /// Generic 500 for storage and serialization failures.
    ///
    /// The detail goes to the log, never to the wire.
    pub fn internal_error() -> Self {
        Self {
            status: 500,
            body: json!({ "errorMsg": "Internal server error" }),
        }
    }
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        Self {
            status: err.status(),
            body: json!({ "errorMsg": err.to_string() }),
        }
    }
}

/// Wire shape of every error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "errorMsg")]
    pub error_msg: String,
}

/// Wire shape of a successful create response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBody {
    pub id: TodoId,
}

/// Wire shape of a successful delete response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedBody {
    pub message: String,
}

impl DeletedBody {
    pub fn new(id: &TodoId) -> Self {
        Self {
            message: format!("Todo '{id}' deleted"),
        }
    }
}
