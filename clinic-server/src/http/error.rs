//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store failures are logged here and never leak into the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required filter parameter missing (400)
    Validation(ValidationError),

    /// Query string could not be decoded (400)
    BadQuery { reason: String },

    /// Filter matched no rows (404)
    NotFound {
        resource: &'static str,
        criterion: &'static str,
    },

    /// Store query failed (500, logged)
    Database {
        resource: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Wrap a store failure for `resource` ("patients", "providers").
    pub fn database(resource: &'static str, source: DbError) -> Self {
        Self::Database { resource, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() })),
            Self::BadQuery { reason } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": format!("Invalid query string: {}", reason) }),
            ),
            Self::NotFound {
                resource,
                criterion,
            } => (
                StatusCode::NOT_FOUND,
                json!({ "message": format!("No {} found with that {}", resource, criterion) }),
            ),
            Self::Database { resource, source } => {
                // Log the actual error, return generic message
                tracing::error!(resource, error = %source, "Error fetching {}", resource);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": format!("Failed to retrieve {}", resource) }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::MissingFilter {
            field: "first name",
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Please provide a first name to filter by" })
        );
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            resource: "providers",
            criterion: "specialty",
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "No providers found with that specialty" })
        );
    }

    #[tokio::test]
    async fn database_error_is_500_without_detail() {
        let err = ApiError::database(
            "patients",
            DbError::Unavailable("Access denied for user 'root'@'10.0.0.7'".into()),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Failed to retrieve patients" }));
        assert!(!body.to_string().contains("Access denied"));
    }
}
