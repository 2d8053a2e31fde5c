//! Per-side state: resources and zones.
//!
//! ## ResourcePool
//!
//! Spendable currency gating card plays. `max` grows by one each round up
//! to `cap`; `current` refills to `max` at the same time.
//!
//! ## SideState
//!
//! One combatant's deck, hand, board and resource pool. The only mutations
//! exposed are structurally valid ones; `place_card` is all-or-nothing.

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::error::PlayError;
use crate::cards::{CardInstance, Deck};
use crate::zones::{Board, Hand};

/// A side's resource pool.
///
/// Invariant: `0 <= current <= max <= cap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourcePool {
    current: i32,
    max: i32,
    cap: i32,
}

impl ResourcePool {
    /// Create a full pool of `initial`, growing at most to `cap`.
    #[must_use]
    pub fn new(initial: i32, cap: i32) -> Self {
        let max = initial.clamp(0, cap.max(0));
        Self {
            current: max,
            max,
            cap: cap.max(0),
        }
    }

    #[must_use]
    pub fn current(&self) -> i32 {
        self.current
    }

    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    #[must_use]
    pub fn cap(&self) -> i32 {
        self.cap
    }

    #[must_use]
    pub fn can_afford(&self, cost: i32) -> bool {
        cost <= self.current
    }

    /// Deduct `cost`. Callers check `can_afford` first.
    pub(crate) fn spend(&mut self, cost: i32) {
        debug_assert!(self.can_afford(cost));
        self.current = (self.current - cost.max(0)).max(0);
    }

    /// Raise `max` by one (capped) and refill `current` to it.
    pub fn grow_and_refill(&mut self) {
        self.max = self.max.saturating_add(1).min(self.cap);
        self.current = self.max;
    }
}

/// One side's full state.
#[derive(Clone, Debug)]
pub struct SideState {
    name: String,
    resources: ResourcePool,
    deck: Deck,
    hand: Hand,
    board: Board,
}

impl SideState {
    /// Create a side with an empty hand and board and the given deck.
    #[must_use]
    pub fn new(name: impl Into<String>, config: &MatchConfig, deck: Deck) -> Self {
        Self {
            name: name.into(),
            resources: ResourcePool::new(config.initial_resource, config.resource_cap),
            deck,
            hand: Hand::new(config.max_hand),
            board: Board::new(config.slot_count),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn resources(&self) -> &ResourcePool {
        &self.resources
    }

    pub(crate) fn resources_mut(&mut self) -> &mut ResourcePool {
        &mut self.resources
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Lowest unoccupied board slot.
    #[must_use]
    pub fn first_free_slot(&self) -> Option<usize> {
        self.board.first_free()
    }

    /// All unoccupied board slots, ascending.
    pub fn free_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.board.free_slots()
    }

    /// Check if the side can pay for `card` right now.
    #[must_use]
    pub fn can_afford(&self, card: &CardInstance) -> bool {
        self.resources.can_afford(card.cost())
    }

    /// Move the card at `hand_index` onto `slot_index`, paying its cost.
    ///
    /// Checks run in order: hand index, slot index, occupancy, cost. A
    /// rejected call leaves hand, board and resources untouched.
    pub fn place_card(&mut self, hand_index: usize, slot_index: usize) -> Result<(), PlayError> {
        let hand_len = self.hand.len();
        let cost = self
            .hand
            .get(hand_index)
            .map(CardInstance::cost)
            .ok_or(PlayError::InvalidHandIndex {
                index: hand_index,
                len: hand_len,
            })?;
        let slot = self.board.vacant_slot(slot_index)?;
        if !self.resources.can_afford(cost) {
            return Err(PlayError::InsufficientResource {
                cost,
                available: self.resources.current(),
            });
        }
        let card = self.hand.remove(hand_index).ok_or(PlayError::InvalidHandIndex {
            index: hand_index,
            len: hand_len,
        })?;

        self.resources.spend(cost);
        debug!(
            "{} plays {} to slot {} ({} resource left)",
            self.name,
            card,
            slot_index,
            self.resources.current()
        );
        slot.fill(card);
        Ok(())
    }

    /// Draw up to `n` cards into hand.
    ///
    /// Stops early when the deck runs out or the hand is full. Returns the
    /// number of cards drawn.
    pub fn draw_to_hand(&mut self, n: usize) -> usize {
        let wanted = n.min(self.hand.remaining_capacity());
        let mut drawn = 0;
        for _ in 0..wanted {
            let Ok(card) = self.deck.draw() else {
                debug!("{} tried to draw from an empty deck", self.name);
                break;
            };
            if self.hand.push(card).is_err() {
                break;
            }
            drawn += 1;
        }
        drawn
    }
}
