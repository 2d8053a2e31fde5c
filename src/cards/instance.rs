//! Card instances - runtime card state.
//!
//! A `CardInstance` is one physical copy of a card. It points at its shared
//! definition and tracks the health it has left. Instances are moved by
//! value between deck, hand and board, so a copy can only ever sit in one
//! zone of one side.

use std::sync::Arc;

use super::definition::{CardDefinition, CardId};

/// A card copy in play.
#[derive(Clone, Debug)]
pub struct CardInstance {
    definition: Arc<CardDefinition>,
    current_health: i32,
}

impl CardInstance {
    /// Create a fresh copy at full health.
    #[must_use]
    pub fn new(definition: Arc<CardDefinition>) -> Self {
        let current_health = definition.max_health;
        Self {
            definition,
            current_health,
        }
    }

    /// The shared definition.
    #[must_use]
    pub fn definition(&self) -> &Arc<CardDefinition> {
        &self.definition
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.definition.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn attack(&self) -> i32 {
        self.definition.attack
    }

    #[must_use]
    pub fn cost(&self) -> i32 {
        self.definition.cost
    }

    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.definition.max_health
    }

    #[must_use]
    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    /// Overwrite the remaining health.
    ///
    /// Callers remove the instance instead of storing a value `<= 0`.
    pub(crate) fn set_health(&mut self, health: i32) {
        debug_assert!(health > 0, "dead instances are removed, not stored");
        self.current_health = health;
    }

    /// Check whether two instances point at the same shared definition.
    #[must_use]
    pub fn shares_definition(&self, other: &CardInstance) -> bool {
        Arc::ptr_eq(&self.definition, &other.definition)
    }
}

impl PartialEq for CardInstance {
    fn eq(&self, other: &Self) -> bool {
        self.definition.id == other.definition.id && self.current_health == other.current_health
    }
}

impl Eq for CardInstance {}

impl std::fmt::Display for CardInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ATK:{} HP:{}/{} COST:{}",
            self.name(),
            self.attack(),
            self.current_health,
            self.max_health(),
            self.cost()
        )
    }
}
