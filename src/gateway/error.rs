//! Error taxonomy seen by the gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tonic::{Code, Status};
use tracing::{error, warn};

use super::envelope::Envelope;

/// Message shown to callers for any internal or transport fault.
pub const INTERNAL_MESSAGE: &str = "internal server error";

/// A failed gateway call: either a domain error relayed from the store, or a
/// fault in reaching it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The referenced product does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Missing fields, wrong types, or values the store rejected.
    #[error("{0}")]
    InvalidArgument(String),

    /// Unexpected fault in the store or an unmapped status code.
    #[error("internal error: {0}")]
    Internal(String),

    /// The RPC channel could not be reached at all.
    #[error("store unavailable: {0}")]
    TransportUnavailable(String),
}

impl GatewayError {
    /// Map this error to the HTTP status of the response.
    ///
    /// A transport fault on a resource route is an internal error for the
    /// caller; only the health probe reports it differently.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            GatewayError::Internal(_) | GatewayError::TransportUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The text placed in the envelope's `message`. Internal detail never
    /// leaves the gateway.
    pub fn public_message(&self) -> String {
        match self {
            GatewayError::NotFound(msg) | GatewayError::InvalidArgument(msg) => msg.clone(),
            GatewayError::Internal(_) | GatewayError::TransportUnavailable(_) => {
                INTERNAL_MESSAGE.to_string()
            }
        }
    }

    /// True when the store never answered (as opposed to answering with an error).
    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::TransportUnavailable(_))
    }
}

impl From<Status> for GatewayError {
    fn from(status: Status) -> Self {
        let message = status.message().to_string();
        match status.code() {
            Code::NotFound => GatewayError::NotFound(message),
            Code::InvalidArgument => GatewayError::InvalidArgument(message),
            Code::Unavailable | Code::DeadlineExceeded | Code::Cancelled => {
                GatewayError::TransportUnavailable(message)
            }
            code => GatewayError::Internal(format!("{code:?}: {message}")),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "store call failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(Envelope::error(self.public_message()))).into_response()
    }
}
