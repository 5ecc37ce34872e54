//! The uniform response body: `{ "status", "message", "data" }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::GatewayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Every gateway response body, success or failure.
///
/// `data` is always serialized, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: EnvelopeStatus,
    pub message: String,
    pub data: Option<Value>,
}

impl Envelope {
    pub fn success(data: Option<Value>, message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: message.into(),
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: message.into(),
            data: None,
        }
    }

    /// Render a route outcome: `Ok` becomes `success` with the given status
    /// code, `Err` goes through the store-code → HTTP mapping.
    ///
    /// Unit results (`()`) render with `data: null`.
    pub fn from_result<T: Serialize>(
        result: Result<T, GatewayError>,
        success: StatusCode,
        message: &str,
    ) -> Response {
        let value = result.and_then(|data| {
            serde_json::to_value(data).map_err(|e| GatewayError::Internal(e.to_string()))
        });
        match value {
            Ok(Value::Null) => (success, Json(Envelope::success(None, message))).into_response(),
            Ok(data) => (success, Json(Envelope::success(Some(data), message))).into_response(),
            Err(err) => err.into_response(),
        }
    }
}
