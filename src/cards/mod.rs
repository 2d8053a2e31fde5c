//! Card system: definitions, instances, catalog and decks.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Immutable card stats, shared via `Arc`
//! - `CardInstance`: One copy in play with its remaining health
//! - `CardCatalog`: Definition lookup
//! - `Deck`, `DeckSpec`, `DeckRecipe`, `DeckLibrary`: Deck construction and draws

pub mod definition;
pub mod instance;
pub mod registry;
pub mod deck;

pub use definition::{CardDefinition, CardId};
pub use instance::CardInstance;
pub use registry::CardCatalog;
pub use deck::{build_deck, Deck, DeckLibrary, DeckRecipe, DeckSpec, DEFAULT_DECK_SIZE};
