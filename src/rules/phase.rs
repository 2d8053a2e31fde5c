//! Match phases.
//!
//! A round is two action windows, player first. Each window is closed by
//! its owner and followed by a combat resolution in which the closing side
//! is the attacker:
//!
//! ```text
//! AwaitingAction(P) -> ResolvingCombat(P) -> CheckingEndCondition(P) -> AwaitingAction(E)
//! AwaitingAction(E) -> ResolvingCombat(E) -> CheckingEndCondition(E) -> RoundAdvance
//! RoundAdvance      -> AwaitingAction(P)
//! CheckingEndCondition(*) -> MatchEnded   (when the scale crosses the threshold)
//! ```

use serde::{Deserialize, Serialize};

use crate::core::SideId;

/// Where the match is in its round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// `side` may play cards and must eventually end its turn.
    AwaitingAction { side: SideId },
    /// Combat is pending; `attacker` deals face damage this resolution.
    ResolvingCombat { attacker: SideId },
    /// Combat has been applied; the end condition is pending.
    CheckingEndCondition { attacker: SideId },
    /// Both windows are done; resources and turn number are pending.
    RoundAdvance,
    /// Terminal.
    MatchEnded { winner: SideId },
}

impl Phase {
    /// The side holding the action window, if any.
    #[must_use]
    pub fn active_side(self) -> Option<SideId> {
        match self {
            Phase::AwaitingAction { side } => Some(side),
            _ => None,
        }
    }

    /// Phases that run without controller input.
    #[must_use]
    pub fn is_automatic(self) -> bool {
        matches!(
            self,
            Phase::ResolvingCombat { .. } | Phase::CheckingEndCondition { .. } | Phase::RoundAdvance
        )
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::MatchEnded { .. })
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingAction { side } => write!(f, "AwaitingAction({side})"),
            Phase::ResolvingCombat { attacker } => write!(f, "ResolvingCombat({attacker})"),
            Phase::CheckingEndCondition { attacker } => write!(f, "CheckingEndCondition({attacker})"),
            Phase::RoundAdvance => write!(f, "RoundAdvance"),
            Phase::MatchEnded { winner } => write!(f, "MatchEnded({winner} wins)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_side() {
        assert_eq!(
            Phase::AwaitingAction { side: SideId::Enemy }.active_side(),
            Some(SideId::Enemy)
        );
        assert_eq!(Phase::RoundAdvance.active_side(), None);
    }

    #[test]
    fn test_classification() {
        assert!(Phase::ResolvingCombat { attacker: SideId::Player }.is_automatic());
        assert!(Phase::RoundAdvance.is_automatic());
        assert!(!Phase::AwaitingAction { side: SideId::Player }.is_automatic());
        assert!(Phase::MatchEnded { winner: SideId::Player }.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Phase::CheckingEndCondition { attacker: SideId::Enemy }.to_string(),
            "CheckingEndCondition(Enemy)"
        );
    }
}
