//! Action representation shared by every controller.
//!
//! Every controller, human, scripted or learned, emits the same shape:
//! an action type plus a hand index and a slot index. The indices are only
//! meaningful for `PlayCard`; for `EndTurn` they are carried but ignored.
//!
//! Controllers propose, the match disposes: nothing here checks legality.

use serde::{Deserialize, Serialize};

use super::side::SideId;

/// The verb of an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// Close this side's action window.
    EndTurn,
    /// Move a card from hand to a board slot.
    PlayCard,
}

/// A proposed action.
///
/// ## Example
///
/// ```
/// use scale_duel::core::{Action, ActionType};
///
/// let play = Action::play(2, 0);
/// assert_eq!(play.action_type, ActionType::PlayCard);
///
/// // Raw policy output: [type, hand, slot]
/// let from_policy = Action::from_discrete([1, 2, 0]);
/// assert_eq!(from_policy, play);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub action_type: ActionType,
    pub hand_index: usize,
    pub slot_index: usize,
}

impl Action {
    /// An end-turn action.
    #[must_use]
    pub const fn end_turn() -> Self {
        Self {
            action_type: ActionType::EndTurn,
            hand_index: 0,
            slot_index: 0,
        }
    }

    /// Play the card at `hand_index` into `slot_index`.
    #[must_use]
    pub const fn play(hand_index: usize, slot_index: usize) -> Self {
        Self {
            action_type: ActionType::PlayCard,
            hand_index,
            slot_index,
        }
    }

    /// Decode a discrete 3-tuple `[type, hand, slot]` from a policy.
    ///
    /// Type `0` ends the turn, any other value plays a card. Indices pass
    /// through unchecked: out-of-range values are rejected later by the
    /// match as ordinary illegal plays.
    #[must_use]
    pub const fn from_discrete(raw: [usize; 3]) -> Self {
        if raw[0] == 0 {
            Self {
                action_type: ActionType::EndTurn,
                hand_index: raw[1],
                slot_index: raw[2],
            }
        } else {
            Self::play(raw[1], raw[2])
        }
    }

    /// Encode back into the discrete 3-tuple form.
    #[must_use]
    pub const fn to_discrete(self) -> [usize; 3] {
        let kind = match self.action_type {
            ActionType::EndTurn => 0,
            ActionType::PlayCard => 1,
        };
        [kind, self.hand_index, self.slot_index]
    }

    /// Check if this is an end-turn action.
    #[must_use]
    pub fn is_end_turn(&self) -> bool {
        self.action_type == ActionType::EndTurn
    }
}

/// An accepted action with metadata for history tracking.
///
/// Used for replay, debugging and determinism checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that took this action.
    pub side: SideId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number across the match (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(side: SideId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            side,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_turn() {
        let action = Action::end_turn();
        assert!(action.is_end_turn());
        assert_eq!(action.to_discrete(), [0, 0, 0]);
    }

    #[test]
    fn test_play() {
        let action = Action::play(3, 1);
        assert!(!action.is_end_turn());
        assert_eq!(action.hand_index, 3);
        assert_eq!(action.slot_index, 1);
    }

    #[test]
    fn test_from_discrete() {
        assert!(Action::from_discrete([0, 5, 5]).is_end_turn());
        assert_eq!(Action::from_discrete([1, 2, 3]), Action::play(2, 3));
        // Any non-zero type is a play, indices untouched
        assert_eq!(Action::from_discrete([4, 99, 42]), Action::play(99, 42));
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(SideId::Enemy, Action::play(0, 2), 3, 7);
        assert_eq!(record.side, SideId::Enemy);
        assert_eq!(record.action, Action::play(0, 2));
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 7);
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::play(1, 2);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
