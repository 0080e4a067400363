//! Error types for the card page service.
//!
//! Errors are rendered as short plain-text responses. Client mistakes keep
//! their message; server-side failures all collapse to the same opaque
//! "Error" body, with the detail kept in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::search::SearchError;

/// Card page error type.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The path id was not an integer.
    #[error("Invalid ID")]
    InvalidId,

    /// The search query could not be translated.
    #[error("{0}")]
    InvalidQuery(#[from] SearchError),

    /// The search matched no cards.
    #[error("No cards found")]
    NotFound,

    /// The card reader failed (catalog, database, upstream API).
    #[error("card lookup failed: {0}")]
    Reader(#[from] anyhow::Error),

    /// The card page template failed to render.
    #[error("card page rendering failed: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::InvalidId => (StatusCode::BAD_REQUEST, "Invalid ID".to_string()),
            Self::InvalidQuery(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::NotFound => (StatusCode::NOT_FOUND, "No cards found".to_string()),
            Self::Reader(err) => {
                tracing::error!(error = %err, "card reader error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error".to_string())
            }
            Self::Render(err) => {
                tracing::error!(error = %err, "card page render error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error".to_string())
            }
        };

        (status, body).into_response()
    }
}
