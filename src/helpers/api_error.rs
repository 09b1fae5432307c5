use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use crate::repositories::google_maps_repo::GoogleMapsError;

/// Caller-facing messages for one proxied operation.
pub struct Operation {
    pub name: &'static str,
    pub rejected: &'static str,
    pub internal: &'static str,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Google Maps API key is not configured")]
    MissingApiKey,
    #[error("{message}")]
    Upstream {
        message: &'static str,
        details: Option<String>,
    },
    #[error("{0}")]
    Internal(&'static str),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Maps an upstream failure for `operation`. Transport and decode detail is logged, never returned.
    pub fn from_google_maps(operation: &Operation, err: GoogleMapsError) -> Self {
        match err {
            GoogleMapsError::MissingApiKey => ApiError::MissingApiKey,
            GoogleMapsError::Rejected { status, error_message } => {
                warn!("{} rejected by Google Maps with status {}", operation.name, status);
                ApiError::Upstream {
                    message: operation.rejected,
                    details: error_message,
                }
            }
            e @ (GoogleMapsError::Transport(_) | GoogleMapsError::Decode(_)) => {
                error!("{} error: {}", operation.name, e);
                ApiError::Internal(operation.internal)
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Upstream { .. } => StatusCode::BAD_REQUEST,
            ApiError::MissingApiKey | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let details = match &self {
            ApiError::Upstream { details, .. } => details.as_deref(),
            _ => None,
        };

        (
            self.status_code(),
            Json(ErrorBody { error: &message, details }),
        ).into_response()
    }
}
