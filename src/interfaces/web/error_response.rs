use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error payload every failing endpoint returns:
/// `{"status":"error","message":"..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    #[serde(skip)]
    pub status_code: StatusCode,
}

impl ErrorResponse {
    pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            status_code,
        }
    }

    /// Client input error: the request was understood but unusable.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Unexpected failure; the caller gets a generic message, the detail
    /// goes to the log.
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status_code = self.status_code;
        (status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_shape() {
        let error = ErrorResponse::bad_request("ip_address is required");
        let serialized = serde_json::to_value(&error).unwrap();
        assert_eq!(
            serialized,
            serde_json::json!({
                "status": "error",
                "message": "ip_address is required",
            })
        );
    }

    #[test]
    fn test_internal_error_is_generic() {
        let error = ErrorResponse::internal();
        assert_eq!(error.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "Internal server error");
    }
}
