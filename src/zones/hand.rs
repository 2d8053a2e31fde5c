//! Bounded hand of cards.
//!
//! Order is insertion order. Hand indices are positions in that order and
//! shift down when an earlier card leaves the hand.

use smallvec::SmallVec;

use crate::cards::CardInstance;

/// A side's hand, capped at a fixed capacity.
#[derive(Clone, Debug)]
pub struct Hand {
    /// SmallVec keeps the common hand sizes (<= 8) inline.
    cards: SmallVec<[CardInstance; 8]>,
    capacity: usize,
}

impl Hand {
    /// Create an empty hand that holds at most `capacity` cards.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: SmallVec::new(),
            capacity,
        }
    }

    /// Add a card. Returns the card back if the hand is full.
    pub fn push(&mut self, card: CardInstance) -> Result<(), CardInstance> {
        if self.is_full() {
            return Err(card);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Remove the card at `index`, shifting later cards down.
    pub fn remove(&mut self, index: usize) -> Option<CardInstance> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardInstance> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    /// How many more cards fit.
    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.cards.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }
}
