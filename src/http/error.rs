//! HTTP mapping for [`RecipeError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::RecipeError;

/// Convert error to appropriate HTTP status code
pub fn status_code(err: &RecipeError) -> StatusCode {
    match err {
        RecipeError::NotFound(_) => StatusCode::NOT_FOUND,
        RecipeError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        RecipeError::RemoteService(_) => StatusCode::BAD_GATEWAY,
        RecipeError::ConfigError(_)
        | RecipeError::StorageError(_)
        | RecipeError::IoError(_)
        | RecipeError::SerdeError(_)
        | RecipeError::TomlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        let message = self.message();

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let err = RecipeError::NotFound("test".to_string());
        assert_eq!(status_code(&err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_remote_service_status() {
        let err = RecipeError::RemoteService("HTTP 500".to_string());
        assert_eq!(status_code(&err), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_invalid_input_status() {
        let err = RecipeError::InvalidInput("empty".to_string());
        assert_eq!(status_code(&err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_io_error_status() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = RecipeError::from(io_err);
        assert_eq!(status_code(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = RecipeError::NotFound("saved search 'x'".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
