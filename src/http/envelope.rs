//! Response envelope construction.
//!
//! Every response this API produces, success or error, is the same JSON
//! shape: `{code, message, data}` plus an HTTP status code. The builder is a
//! thin constructor; code values are chosen by callers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::exec::ExecError;

/// Application-level code for a successful operation.
pub const CODE_SUCCESS: i64 = 100;
/// Application-level code for an authentication failure.
pub const CODE_AUTH_FAILED: i64 = 10200;
/// Application-level code for a request or command error.
pub const CODE_REQUEST_ERROR: i64 = 10400;

pub const MSG_SUCCESS: &str = "success";
pub const MSG_AUTH_FAILED: &str = "user authentication failed";
pub const MSG_REQUEST_ERROR: &str = "user request error";

/// Wire form of every API response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i64,
    pub message: String,
    pub data: Value,
}

/// An envelope paired with the HTTP status it travels under.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub envelope: Envelope,
}

impl ApiResponse {
    pub fn build(code: i64, message: impl Into<String>, data: Value, status: StatusCode) -> Self {
        Self {
            status,
            envelope: Envelope {
                code,
                message: message.into(),
                data,
            },
        }
    }

    /// Sugar for a 200 response with code 100.
    pub fn success(data: Value) -> Self {
        Self::build(CODE_SUCCESS, MSG_SUCCESS, data, StatusCode::OK)
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        // Json sets Content-Type and a byte-accurate Content-Length;
        // serde_json leaves non-ASCII characters unescaped.
        (self.status, Json(self.envelope)).into_response()
    }
}

/// A failed operation: envelope fields plus the HTTP status to report.
#[derive(Debug, Clone)]
pub struct Failure {
    pub code: i64,
    pub message: String,
    pub detail: String,
    pub status: StatusCode,
}

impl Failure {
    /// A request-level error (bad parameters, failed command): code 10400,
    /// HTTP 500.
    pub fn request_error(detail: impl Into<String>) -> Self {
        Self {
            code: CODE_REQUEST_ERROR,
            message: MSG_REQUEST_ERROR.to_string(),
            detail: detail.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// A route miss: code 10400, HTTP 404.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            code: CODE_REQUEST_ERROR,
            message: MSG_REQUEST_ERROR.to_string(),
            detail: detail.into(),
            status: StatusCode::NOT_FOUND,
        }
    }
}

/// What an operation produces: JSON data or a structured failure.
pub type Outcome = Result<Value, Failure>;

impl From<Failure> for ApiResponse {
    fn from(failure: Failure) -> Self {
        ApiResponse::build(
            failure.code,
            failure.message,
            Value::String(failure.detail),
            failure.status,
        )
    }
}

impl From<ExecError> for Failure {
    fn from(err: ExecError) -> Self {
        Failure::request_error(format!("command execution failed: {}", err.detail()))
    }
}
