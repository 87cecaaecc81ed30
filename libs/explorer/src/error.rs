//! Error responses for the explorer routes.
//!
//! The explorer has no error taxonomy of its own beyond HTTP status
//! propagation: missing assets are 404s and failures inside the bundled UI
//! lookup are 500s.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while serving the explorer.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Lookup in the bundled Swagger UI distribution failed.
    #[error("failed to load bundled UI asset: {0}")]
    BundledAsset(String),
}

/// JSON body returned with explorer error statuses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ExplorerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "explorer request failed");

        let body = Json(ErrorResponse {
            error: "InternalError".to_string(),
            message: self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// 404 response for assets the explorer does not serve.
pub(crate) fn not_found() -> Response {
    let body = Json(ErrorResponse {
        error: "NotFound".to_string(),
        message: "The requested resource was not found".to_string(),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_asset_error_is_internal() {
        let response = ExplorerError::BundledAsset("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(not_found().status(), StatusCode::NOT_FOUND);
    }
}
