//! Card readers.
//!
//! [`CardReader`] abstracts where cards come from so handlers and tests can
//! swap sources freely. The production implementation, [`CatalogReader`],
//! serves cards out of a JSON catalog loaded once at startup.

use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;

use crate::card::Card;
use crate::search::SearchSpec;

/// Source of cards for the page handlers.
#[async_trait]
pub trait CardReader: Send + Sync {
    /// All cards matching the search, in source order.
    async fn fetch_cards(&self, spec: &SearchSpec) -> anyhow::Result<Vec<Card>>;
}

/// In-memory reader backed by a JSON card catalog.
#[derive(Debug)]
pub struct CatalogReader {
    cards: Vec<Card>,
}

impl CatalogReader {
    /// Load the catalog from a JSON file of cards.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("reading card catalog {}", path.display()))?;
        let cards: Vec<Card> = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing card catalog {}", path.display()))?;
        Ok(Self { cards })
    }

    /// Build a reader directly from cards already in memory.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards in the catalog.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog holds no cards at all.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[async_trait]
impl CardReader for CatalogReader {
    async fn fetch_cards(&self, spec: &SearchSpec) -> anyhow::Result<Vec<Card>> {
        Ok(self
            .cards
            .iter()
            .filter(|card| spec.matches(card))
            .cloned()
            .collect())
    }
}
