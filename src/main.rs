//! Deckview - HTTP server for Magic: The Gathering card preview pages.
//!
//! Serves one HTML page per card printing with Twitter summary-card
//! metadata, plus static files for every other path.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use deckview::reader::CatalogReader;
use deckview::render::Renderer;
use deckview::{AppState, Config, router};

/// Deckview - social-preview HTML pages for Magic: The Gathering cards.
#[derive(Parser, Debug)]
#[command(name = "deckview")]
#[command(about = "Card preview page server for Magic: The Gathering", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();

    // Load the card catalog
    let reader = CatalogReader::load(&config.catalog_path).await?;
    tracing::info!(cards = reader.len(), "card catalog loaded");

    // Parse the card template up front; a broken template aborts startup
    let renderer = Renderer::new()?;

    // Create application state
    let state = AppState::new(config, Arc::new(reader), renderer);

    // Build router with middleware
    let app = router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "starting card page server");

    axum::serve(listener, app).await?;

    Ok(())
}
