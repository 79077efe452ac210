//! JSON response envelope shared by every endpoint.
//!
//! Success: `{"success": true, "data": ...}` (optionally with `message`).
//! Failure: `{"success": false, "error": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Message returned for any request body that fails structural validation.
pub const INVALID_REQUEST_SCHEMA: &str = "Invalid Request Schema";

/// Message returned for unexpected failures. Details go to the log only.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// `{message}` payload used by confirmations.
#[derive(Debug, Clone, Serialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Builds a success response with the given status.
pub fn success<T: Serialize>(status: StatusCode, body: ApiResponse<T>) -> Response {
    (status, Json(body)).into_response()
}

/// Builds an error envelope with the given status.
pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::error(message))).into_response()
}

/// 400 with the generic schema message.
pub fn invalid_request_schema() -> Response {
    failure(StatusCode::BAD_REQUEST, INVALID_REQUEST_SCHEMA)
}

/// 500 with the generic message.
pub fn internal_error() -> Response {
    failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_omits_error() {
        let body = serde_json::to_value(ApiResponse::ok(MessageData::new("done"))).unwrap();
        assert_eq!(body, json!({"success": true, "data": {"message": "done"}}));
    }

    #[test]
    fn error_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::error("nope")).unwrap();
        assert_eq!(body, json!({"success": false, "error": "nope"}));
    }

    #[test]
    fn message_sits_beside_data() {
        let body =
            serde_json::to_value(ApiResponse::ok(json!({"id": 1})).with_message("updated"))
                .unwrap();
        assert_eq!(
            body,
            json!({"success": true, "message": "updated", "data": {"id": 1}})
        );
    }

    #[test]
    fn failure_sets_status() {
        let response = failure(StatusCode::CONFLICT, "taken");
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(invalid_request_schema().status(), StatusCode::BAD_REQUEST);
        assert_eq!(internal_error().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
