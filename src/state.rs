//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::reader::CardReader;
use crate::render::Renderer;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of cards for the page handlers.
    pub reader: Arc<dyn CardReader>,

    /// Card page renderer, template parsed up front.
    pub renderer: Arc<Renderer>,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Assemble application state from its parts.
    pub fn new(config: Config, reader: Arc<dyn CardReader>, renderer: Renderer) -> Self {
        Self {
            reader,
            renderer: Arc::new(renderer),
            config: Arc::new(config),
        }
    }
}
