use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NICHE_REQUIRED: &str = "Niche is required";
pub const GENERATION_FAILED: &str = "Failed to generate ideas";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: niche is missing, empty, or not a string")]
    InvalidInput,

    /// Carries a diagnostic detail for the log; the response body only
    /// ever holds the fixed message.
    #[error("synthesis failed: {0}")]
    SynthesisFailure(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::SynthesisFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::InvalidInput => NICHE_REQUIRED,
            ApiError::SynthesisFailure(_) => GENERATION_FAILED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::SynthesisFailure(detail) = &self {
            tracing::error!(error = %detail, "error generating ideas");
        }

        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let err = ApiError::InvalidInput;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Niche is required");
    }

    #[test]
    fn synthesis_failure_hides_detail() {
        let err = ApiError::SynthesisFailure("expected value at line 1".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to generate ideas");
        assert!(err.to_string().contains("expected value at line 1"));
    }
}
