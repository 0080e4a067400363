//! Route definitions for the card page service.
//!
//! ## Routes
//!
//! - `GET /mtg/cards/{id}` - Card page for a Gatherer multiverse id
//! - everything else - Static files from the configured directory
//!
//! Recovery is the outermost layer, so a panicking handler still produces
//! a 500 response and the server keeps serving. Request tracing runs
//! inside it.

mod card;

use std::any::Any;

use axum::Router;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Level;

use crate::state::AppState;

/// Build the complete card page service router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    // The last layer added runs first, so recovery wraps tracing and the
    // routes.
    Router::new()
        .route("/mtg/cards/{id}", get(card::card_page))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }))
        .layer(CatchPanicLayer::custom(recover))
}

/// Turn a caught handler panic into an opaque 500 response.
fn recover(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };

    tracing::error!(panic = %detail, "request handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, "Error").into_response()
}
