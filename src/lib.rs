//! Deckview - Social-preview HTML pages for Magic: The Gathering cards.
//!
//! This crate provides a lightweight HTTP server that renders a static HTML
//! page per card printing, carrying Twitter summary-card metadata so links
//! shared in social clients unfurl with the card's name, rules text and
//! artwork.
//!
//! # Architecture
//!
//! - **Translate**: Turns the path id into a `multiverseid` search
//! - **Fetch**: Looks the search up through a pluggable [`reader::CardReader`]
//! - **Render**: Fills one fixed template, parsed once at startup
//!
//! # URL Pattern
//!
//! ```text
//! GET /mtg/cards/{id}
//! ```
//!
//! where `id` is a Gatherer multiverse id. Every other path is served from
//! the static file directory.
//!
//! # Error contract
//!
//! Client mistakes get plain-text bodies naming the mistake ("Invalid ID",
//! "No cards found", search messages); every server-side failure collapses
//! to an opaque 500 "Error" with the detail kept in the logs.

pub mod card;
pub mod config;
pub mod error;
pub mod reader;
pub mod render;
pub mod routes;
pub mod search;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
