//! Fixed row of board slots.
//!
//! Slot position is meaningful: combat pairs this side's slot `i` with the
//! opponent's slot `i`. The slot count is fixed when the board is created.

use smallvec::SmallVec;

use crate::cards::CardInstance;
use crate::core::PlayError;

/// One side's board.
#[derive(Clone, Debug)]
pub struct Board {
    slots: SmallVec<[Option<CardInstance>; 8]>,
}

impl Board {
    /// Create an empty board with `slot_count` slots.
    #[must_use]
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: (0..slot_count).map(|_| None).collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The card in `slot`, if any. Out-of-range slots read as empty.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&CardInstance> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut CardInstance> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    #[must_use]
    pub fn is_occupied(&self, slot: usize) -> bool {
        self.get(slot).is_some()
    }

    /// Borrow an empty, in-range slot so a card can be placed into it.
    ///
    /// Errors name the first failed check: range, then occupancy.
    pub(crate) fn vacant_slot(&mut self, slot: usize) -> Result<VacantSlot<'_>, PlayError> {
        let slots = self.slots.len();
        match self.slots.get_mut(slot) {
            None => Err(PlayError::InvalidSlotIndex { index: slot, slots }),
            Some(Some(_)) => Err(PlayError::SlotOccupied(slot)),
            Some(entry) => Ok(VacantSlot { entry }),
        }
    }

    /// Take the card out of `slot`.
    pub(crate) fn remove(&mut self, slot: usize) -> Option<CardInstance> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Lowest unoccupied slot.
    #[must_use]
    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// All unoccupied slots, ascending.
    pub fn free_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| i)
    }

    /// Occupied slots with their cards, ascending.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &CardInstance)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|c| (i, c)))
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// Per-slot view, `None` for empty slots.
    pub fn slots(&self) -> impl Iterator<Item = Option<&CardInstance>> {
        self.slots.iter().map(Option::as_ref)
    }
}

/// An empty slot, checked and borrowed.
pub(crate) struct VacantSlot<'a> {
    entry: &'a mut Option<CardInstance>,
}

impl VacantSlot<'_> {
    pub(crate) fn fill(self, card: CardInstance) {
        *self.entry = Some(card);
    }
}
