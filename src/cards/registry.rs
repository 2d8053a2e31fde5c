//! Card catalog for definition lookup.
//!
//! The `CardCatalog` owns every card definition for a session and hands out
//! shared references. Decks are built from those references, so a
//! definition is never copied into a deck.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::error::CatalogError;

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use scale_duel::cards::{CardCatalog, CardDefinition, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new(CardId::new(1), "Wolf", 3, 2, 4)).unwrap();
///
/// let wolf = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(wolf.name, "Wolf");
/// assert!(catalog.register(CardDefinition::new(CardId::new(1), "Dup", 1, 1, 1)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of definitions.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.register(definition)?;
        }
        Ok(catalog)
    }

    /// Register a card definition.
    ///
    /// Rejects an id that is already registered and stats that
    /// [`CardDefinition::validate`] refuses.
    pub fn register(&mut self, card: CardDefinition) -> Result<Arc<CardDefinition>, CatalogError> {
        card.validate()?;
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        let shared = Arc::new(card);
        self.cards.insert(shared.id, Arc::clone(&shared));
        Ok(shared)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<CardDefinition>> {
        self.cards.get(&id)
    }

    /// Resolve a list of IDs into shared definitions, preserving order.
    pub fn resolve(&self, ids: &[CardId]) -> Result<Vec<Arc<CardDefinition>>, CatalogError> {
        ids.iter()
            .map(|&id| self.get(id).cloned().ok_or(CatalogError::UnknownCard(id)))
            .collect()
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values()
    }
}
