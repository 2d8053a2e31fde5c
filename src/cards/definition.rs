//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type: its
//! attack, cost and maximum health. Definitions are shared by reference;
//! the health a copy has left in play lives on `CardInstance`.

use serde::{Deserialize, Serialize};

use crate::core::error::CatalogError;

/// Unique identifier for a card definition.
///
/// This identifies the "type" of card, not a specific copy in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use scale_duel::cards::{CardDefinition, CardId};
///
/// let wolf = CardDefinition::new(CardId::new(1), "Wolf", 3, 2, 4)
///     .with_description("Hunts in packs.");
///
/// assert_eq!(wolf.attack, 3);
/// assert_eq!(wolf.cost, 2);
/// assert_eq!(wolf.max_health, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Damage dealt to the opposing card, or to the scale when unopposed.
    pub attack: i32,

    /// Resource spent to place the card.
    pub cost: i32,

    /// Health a fresh copy starts with.
    pub max_health: i32,

    /// Flavor text.
    #[serde(default)]
    pub description: String,
}

impl CardDefinition {
    /// Create a new card definition with an empty description.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, attack: i32, cost: i32, max_health: i32) -> Self {
        Self {
            id,
            name: name.into(),
            attack,
            cost,
            max_health,
            description: String::new(),
        }
    }

    /// Check that a fresh copy could legally sit on a board.
    ///
    /// `max_health` must be positive, `attack` and `cost` non-negative.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.max_health <= 0 || self.attack < 0 || self.cost < 0 {
            return Err(CatalogError::InvalidStats {
                id: self.id,
                attack: self.attack,
                cost: self.cost,
                max_health: self.max_health,
            });
        }
        Ok(())
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
