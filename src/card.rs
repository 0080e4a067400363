//! Card catalog data model.
//!
//! [`Card`] and [`Edition`] mirror the catalog JSON; [`CardPage`] is the
//! request-scoped view-model handed to the template.

use serde::{Deserialize, Serialize};

/// A logical card: one name and rules text, printed as one or more editions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Card name as printed.
    pub name: String,

    /// Rules text (empty for vanilla creatures and basic lands).
    #[serde(default)]
    pub text: String,

    /// Every known printing of this card, in catalog order.
    #[serde(default)]
    pub editions: Vec<Edition>,
}

/// One physical printing of a card.
///
/// The `Default` value (id 0, empty strings) doubles as the "no printing
/// selected" placeholder on a [`CardPage`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Edition {
    /// Gatherer multiverse id, unique across the whole catalog.
    pub multiverse_id: u64,

    /// Set this printing appeared in (e.g. "Limited Edition Alpha").
    #[serde(default)]
    pub set: String,

    /// Card artwork URL for this printing.
    #[serde(default)]
    pub image_url: String,
}

/// Request-scoped view-model: one card plus the printing being viewed.
///
/// Built fresh per request and dropped once the response is written. The
/// edition is `Edition::default()` when the card carries no printing with
/// the requested multiverse id.
#[derive(Debug, Serialize)]
pub struct CardPage {
    /// The resolved card.
    pub card: Card,
    /// The printing the request asked for.
    pub edition: Edition,
}

impl Card {
    /// First edition carrying the given multiverse id, if any.
    pub fn edition(&self, multiverse_id: u64) -> Option<&Edition> {
        self.editions
            .iter()
            .find(|e| e.multiverse_id == multiverse_id)
    }
}
