//! Read-only match snapshot handed to controllers.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardInstance};
use crate::core::{Action, ResourcePool, SideId};
use crate::zones::Board;

/// Stats of one visible card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub attack: i32,
    pub cost: i32,
    pub health: i32,
    pub max_health: i32,
}

impl From<&CardInstance> for CardView {
    fn from(card: &CardInstance) -> Self {
        Self {
            id: card.id(),
            attack: card.attack(),
            cost: card.cost(),
            health: card.current_health(),
            max_health: card.max_health(),
        }
    }
}

pub(crate) fn board_view(board: &Board) -> Vec<Option<CardView>> {
    board.slots().map(|slot| slot.map(CardView::from)).collect()
}

/// What one side can see when it is asked to act.
///
/// The opponent's hand is hidden; only its size is exposed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub side: SideId,
    pub turn_number: u32,
    pub scale_points: i32,
    pub end_threshold: i32,
    pub resources: ResourcePool,
    pub opponent_resources: ResourcePool,
    pub hand: Vec<CardView>,
    pub max_hand: usize,
    pub board: Vec<Option<CardView>>,
    pub opponent_board: Vec<Option<CardView>>,
    pub opponent_hand_size: usize,
    pub deck_size: usize,
}

impl Observation {
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.board.len()
    }

    /// Hand positions whose cost fits the current pool, ascending.
    #[must_use]
    pub fn affordable_hand_indices(&self) -> Vec<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| self.resources.can_afford(card.cost))
            .map(|(i, _)| i)
            .collect()
    }

    /// Own empty slots, ascending.
    #[must_use]
    pub fn free_slots(&self) -> Vec<usize> {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    #[must_use]
    pub fn first_free_slot(&self) -> Option<usize> {
        self.board.iter().position(Option::is_none)
    }

    /// Every action the engine would accept right now.
    ///
    /// `EndTurn` comes first, followed by plays in hand-major order.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let free = self.free_slots();
        let mut actions = vec![Action::end_turn()];
        for hand_index in self.affordable_hand_indices() {
            actions.extend(free.iter().map(|&slot| Action::play(hand_index, slot)));
        }
        actions
    }

    /// Board of `side` in absolute terms, independent of who is observing.
    #[must_use]
    pub fn board_of(&self, side: SideId) -> &[Option<CardView>] {
        if side == self.side {
            &self.board
        } else {
            &self.opponent_board
        }
    }

    /// Pool of `side` in absolute terms.
    #[must_use]
    pub fn resources_of(&self, side: SideId) -> &ResourcePool {
        if side == self.side {
            &self.resources
        } else {
            &self.opponent_resources
        }
    }
}
