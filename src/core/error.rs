//! Error kinds.
//!
//! Two families are kept apart:
//!
//! - **Legality errors** (`PlayError`, `EmptyDeck`): expected outcomes of a
//!   controller proposal. Cheap to construct, never fatal; the rejected
//!   action simply has no effect.
//! - **Misuse errors** (`SequenceError`, `ConfigError`, `CatalogError`):
//!   the caller drove the engine incorrectly or set it up with bad data.

use thiserror::Error;

use super::side::SideId;
use crate::cards::CardId;
use crate::rules::Phase;

/// Why a proposed play was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The hand index does not name a card in hand.
    #[error("hand index {index} out of range (hand holds {len})")]
    InvalidHandIndex { index: usize, len: usize },

    /// The slot index is not a board position.
    #[error("slot index {index} out of range ({slots} slots)")]
    InvalidSlotIndex { index: usize, slots: usize },

    /// The target slot already holds a card.
    #[error("slot {0} is occupied")]
    SlotOccupied(usize),

    /// The card costs more than the side can currently spend.
    #[error("card costs {cost} but only {available} is available")]
    InsufficientResource { cost: i32, available: i32 },

    /// The side does not hold the action window.
    #[error("it is not {0}'s action window")]
    NotYourTurn(SideId),

    /// The match already has a winner.
    #[error("the match has ended")]
    MatchEnded,
}

/// Drawing from a deck with no cards left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("deck is empty")]
pub struct EmptyDeck;

/// A phase-machine operation was invoked out of order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("{operation} is not valid during {phase}")]
    WrongPhase {
        operation: &'static str,
        phase: Phase,
    },
}

/// Configuration values the engine cannot run with.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("slot_count must be at least 1")]
    NoSlots,

    #[error("max_hand must be at least 1")]
    NoHandCapacity,

    #[error("end_threshold must be positive, got {0}")]
    NonPositiveThreshold(i32),

    #[error("initial_resource {initial} must lie in 0..={cap}")]
    ResourceOutOfRange { initial: i32, cap: i32 },
}

/// Card catalog lookups and registrations that failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{0} is already registered")]
    DuplicateId(CardId),

    #[error("{0} is not in the catalog")]
    UnknownCard(CardId),

    /// Health must be positive; attack and cost must not be negative.
    #[error("{id} has invalid stats (attack {attack}, cost {cost}, max_health {max_health})")]
    InvalidStats {
        id: CardId,
        attack: i32,
        cost: i32,
        max_health: i32,
    },
}

/// Anything that can go wrong while assembling a match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
