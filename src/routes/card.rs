//! Card page route handler.
//!
//! Handles `GET /mtg/cards/{id}` where `id` is a Gatherer multiverse id.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};

use crate::card::{CardPage, Edition};
use crate::error::PageError;
use crate::search;
use crate::state::AppState;

/// Handle a card page request for a multiverse id.
///
/// This is the only dynamic route. It:
/// 1. Parses the path id as an integer
/// 2. Translates `multiverseid=<id>` into a search
/// 3. Fetches matching cards through the reader
/// 4. Picks the first card, and the first of its editions with the requested id
/// 5. Renders the card page
pub async fn card_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    let id: u64 = id.parse().map_err(|_| PageError::InvalidId)?;

    let raw_query = format!("multiverseid={id}");
    let spec = search::parse_search(&raw_query)?;

    let cards = state.reader.fetch_cards(&spec).await?;

    let Some(card) = cards.into_iter().next() else {
        return Err(PageError::NotFound);
    };

    let edition = match card.edition(id) {
        Some(edition) => {
            tracing::debug!(multiverse_id = id, set = %edition.set, "edition matched");
            edition.clone()
        }
        None => {
            // A card can match the search while carrying no edition with
            // this id. The page still renders, with empty edition fields.
            tracing::debug!(multiverse_id = id, card = %card.name, "no edition matched");
            Edition::default()
        }
    };

    let page = CardPage { card, edition };
    let html = state.renderer.render_card(&page)?;

    Ok(Html(html).into_response())
}
