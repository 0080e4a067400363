//! Search query translation.
//!
//! Turns a raw query string (`multiverseid=175`) into a [`SearchSpec`] the
//! card reader can evaluate. Unknown parameters and malformed values are
//! rejected with an error message suitable for returning to the client.

use thiserror::Error;

use crate::card::Card;

/// A search query that failed translation.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("unknown search parameter '{0}'")]
    UnknownParameter(String),

    #[error("invalid multiverseid '{0}': expected a non-negative integer")]
    InvalidMultiverseId(String),

    #[error("search query needs a multiverseid filter")]
    MissingMultiverseId,
}

/// Translated search: the set of multiverse ids a card must carry to match.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpec {
    multiverse_ids: Vec<u64>,
}

impl SearchSpec {
    /// Multiverse ids this search filters on, in query order.
    pub fn multiverse_ids(&self) -> &[u64] {
        &self.multiverse_ids
    }

    /// Whether a card carries any of the searched printings.
    pub fn matches(&self, card: &Card) -> bool {
        card.editions
            .iter()
            .any(|e| self.multiverse_ids.contains(&e.multiverse_id))
    }
}

/// Translate a raw URL-encoded query string into a [`SearchSpec`].
///
/// Accepts `multiverseid` parameters only; repeating the parameter widens
/// the search. Every other parameter name is rejected, as is a query with
/// no `multiverseid` at all.
pub fn parse_search(raw_query: &str) -> Result<SearchSpec, SearchError> {
    let mut multiverse_ids = Vec::new();

    for (key, value) in url::form_urlencoded::parse(raw_query.as_bytes()) {
        match key.as_ref() {
            "multiverseid" => match value.parse::<u64>() {
                Ok(id) => multiverse_ids.push(id),
                Err(_) => {
                    return Err(SearchError::InvalidMultiverseId(value.into_owned()));
                }
            },
            _ => return Err(SearchError::UnknownParameter(key.into_owned())),
        }
    }

    if multiverse_ids.is_empty() {
        return Err(SearchError::MissingMultiverseId);
    }

    Ok(SearchSpec { multiverse_ids })
}
