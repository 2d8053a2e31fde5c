//! Core engine types: sides, configuration, RNG, actions, errors, side state.
//!
//! This module contains the building blocks the match engine and the
//! controllers share.

pub mod side;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use side::{SideId, SideMap};
pub use rng::GameRng;
pub use config::MatchConfig;
pub use action::{Action, ActionRecord, ActionType};
pub use error::{CatalogError, ConfigError, EmptyDeck, PlayError, SequenceError, SetupError};
pub use state::{ResourcePool, SideState};
