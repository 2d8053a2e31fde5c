//! The controller seam.

use crate::core::{Action, PlayError};

use super::observation::Observation;

/// Decides actions for one side.
///
/// The match never trusts a controller: every proposal goes through
/// `Match::apply`, and a rejected proposal is reported back through
/// `on_rejected` with no effect on the match.
pub trait Controller {
    /// Called once when the side's action window opens.
    fn begin_turn(&mut self, _obs: &Observation) {}

    /// Propose the next action for the current window.
    fn propose_action(&mut self, obs: &Observation) -> Action;

    /// Called when the engine refused the last proposal.
    fn on_rejected(&mut self, _action: Action, _error: PlayError) {}

    fn name(&self) -> &str;
}

impl<C: Controller + ?Sized> Controller for Box<C> {
    fn begin_turn(&mut self, obs: &Observation) {
        (**self).begin_turn(obs);
    }

    fn propose_action(&mut self, obs: &Observation) -> Action {
        (**self).propose_action(obs)
    }

    fn on_rejected(&mut self, action: Action, error: PlayError) {
        (**self).on_rejected(action, error);
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
