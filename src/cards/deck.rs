//! Deck construction and drawing.
//!
//! A deck is built from a *pool* of definitions:
//!
//! 1. The pool is cycled until `desired_size` entries exist, so a small
//!    pool can fill a larger deck by repetition.
//! 2. The whole sequence is repeated `repeat_factor` times.
//! 3. Every entry becomes a fresh `CardInstance` and the deck is shuffled.
//!
//! Draws come off the front.

use std::collections::VecDeque;
use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use super::instance::CardInstance;
use super::registry::CardCatalog;
use crate::core::error::{CatalogError, EmptyDeck};
use crate::core::rng::GameRng;

/// Default number of cards a deck recipe produces before repetition.
pub const DEFAULT_DECK_SIZE: usize = 20;

/// An ordered draw pile.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: VecDeque<CardInstance>,
}

impl Deck {
    /// Create a deck from cards in draw order (front first).
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = CardInstance>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the front card.
    pub fn draw(&mut self) -> Result<CardInstance, EmptyDeck> {
        self.cards.pop_front().ok_or(EmptyDeck)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }
}

/// Build a shuffled deck from a definition pool.
///
/// An empty pool yields an empty deck. A `repeat_factor` of 0 is treated as 1.
///
/// ```
/// use std::sync::Arc;
/// use scale_duel::cards::{build_deck, CardDefinition, CardId};
/// use scale_duel::core::GameRng;
///
/// let pool: Vec<_> = (1..=5)
///     .map(|i| Arc::new(CardDefinition::new(CardId::new(i), format!("C{i}"), 1, 1, 2)))
///     .collect();
///
/// let deck = build_deck(&pool, 20, 1, &mut GameRng::new(1));
/// assert_eq!(deck.len(), 20);
/// ```
pub fn build_deck(
    pool: &[Arc<CardDefinition>],
    desired_size: usize,
    repeat_factor: usize,
    rng: &mut GameRng,
) -> Deck {
    if pool.is_empty() {
        return Deck::default();
    }

    let repeat = repeat_factor.max(1);
    let mut cards: Vec<CardInstance> = (0..repeat)
        .flat_map(|_| pool.iter().cycle().take(desired_size))
        .map(|definition| CardInstance::new(Arc::clone(definition)))
        .collect();

    rng.shuffle(&mut cards);
    Deck::from_cards(cards)
}

/// A deck recipe expressed in card IDs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
    /// Distinct cards to cycle through.
    pub pool: Vec<CardId>,

    /// Entries produced by cycling the pool.
    #[serde(default = "default_deck_size")]
    pub desired_size: usize,

    /// Times the cycled sequence is repeated.
    #[serde(default = "default_repeat_factor")]
    pub repeat_factor: usize,
}

fn default_deck_size() -> usize {
    DEFAULT_DECK_SIZE
}

fn default_repeat_factor() -> usize {
    1
}

impl DeckSpec {
    /// Create a spec with the default size and no repetition.
    #[must_use]
    pub fn new(pool: impl Into<Vec<CardId>>) -> Self {
        Self {
            pool: pool.into(),
            desired_size: DEFAULT_DECK_SIZE,
            repeat_factor: 1,
        }
    }

    /// A spec that produces no cards.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[must_use]
    pub fn with_desired_size(mut self, size: usize) -> Self {
        self.desired_size = size;
        self
    }

    #[must_use]
    pub fn with_repeat_factor(mut self, factor: usize) -> Self {
        self.repeat_factor = factor;
        self
    }

    /// Resolve the pool against a catalog.
    pub fn resolve(&self, catalog: &CardCatalog) -> Result<DeckRecipe, CatalogError> {
        Ok(DeckRecipe {
            pool: catalog.resolve(&self.pool)?,
            desired_size: self.desired_size,
            repeat_factor: self.repeat_factor,
        })
    }
}

/// A deck spec resolved to shared definitions, ready to build decks from.
#[derive(Clone, Debug)]
pub struct DeckRecipe {
    pub pool: Vec<Arc<CardDefinition>>,
    pub desired_size: usize,
    pub repeat_factor: usize,
}

impl DeckRecipe {
    /// Build a fresh shuffled deck.
    pub fn build(&self, rng: &mut GameRng) -> Deck {
        build_deck(&self.pool, self.desired_size, self.repeat_factor, rng)
    }
}

/// The player's deck plus the roster of opponent decks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckLibrary {
    pub player: Option<DeckSpec>,
    #[serde(default)]
    pub opponents: Vec<DeckSpec>,
}

impl DeckLibrary {
    #[must_use]
    pub fn new(player: DeckSpec) -> Self {
        Self {
            player: Some(player),
            opponents: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_opponent(mut self, deck: DeckSpec) -> Self {
        self.opponents.push(deck);
        self
    }

    /// The player's deck, or an empty spec if none was assigned.
    #[must_use]
    pub fn player_deck(&self) -> DeckSpec {
        self.player.clone().unwrap_or_else(|| {
            warn!("no player deck assigned; using an empty deck");
            DeckSpec::empty()
        })
    }

    /// The opponent deck at `index`, or an empty spec if out of range.
    #[must_use]
    pub fn opponent(&self, index: usize) -> DeckSpec {
        self.opponents.get(index).cloned().unwrap_or_else(|| {
            warn!(
                "opponent deck index {} out of range ({} decks); using an empty deck",
                index,
                self.opponents.len()
            );
            DeckSpec::empty()
        })
    }
}
