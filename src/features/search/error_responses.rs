use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use validator::ValidationErrors;

use crate::data::models::DictionaryError;

impl From<ValidationErrors> for DictionaryError {
    fn from(err: ValidationErrors) -> Self {
        DictionaryError::ValidationError(err.to_string())
    }
}

impl IntoResponse for DictionaryError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            DictionaryError::ValidationError(e) => (StatusCode::BAD_REQUEST, e),
            DictionaryError::PoolError(e) => {
                log::error!("Failed to get DB connection: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable".to_string())
            }
            DictionaryError::DatabaseError(e) => {
                log::error!("Database error during lookup: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", e))
            }
            DictionaryError::TaskError(e) => {
                log::error!("Lookup task failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Lookup failed".to_string())
            }
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        let response = DictionaryError::ValidationError("too long".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_errors_are_server_errors() {
        let response = DictionaryError::DatabaseError(diesel::result::Error::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
