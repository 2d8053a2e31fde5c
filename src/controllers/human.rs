//! Controller fed by an external input source.
//!
//! The UI (or a test) sends `Action`s down a channel; the controller blocks
//! until one arrives. A dropped sender, or an expired timeout when one is
//! set, ends the turn.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use log::{debug, warn};

use crate::core::Action;

use super::observation::Observation;
use super::traits::Controller;

#[derive(Debug)]
pub struct HumanController {
    name: String,
    receiver: Receiver<Action>,
    timeout: Option<Duration>,
}

impl HumanController {
    pub fn new(name: impl Into<String>, receiver: Receiver<Action>) -> Self {
        Self {
            name: name.into(),
            receiver,
            timeout: None,
        }
    }

    /// Create a controller together with the sender that feeds it.
    pub fn channel(name: impl Into<String>) -> (Self, Sender<Action>) {
        let (sender, receiver) = mpsc::channel();
        (Self::new(name, receiver), sender)
    }

    /// End the turn if no input arrives within `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Controller for HumanController {
    fn propose_action(&mut self, _obs: &Observation) -> Action {
        match self.timeout {
            Some(timeout) => match self.receiver.recv_timeout(timeout) {
                Ok(action) => action,
                Err(RecvTimeoutError::Timeout) => {
                    warn!("{}: no input within {:?}, ending turn", self.name, timeout);
                    Action::end_turn()
                }
                Err(RecvTimeoutError::Disconnected) => {
                    debug!("{}: input closed, ending turn", self.name);
                    Action::end_turn()
                }
            },
            None => self.receiver.recv().unwrap_or_else(|_| {
                debug!("{}: input closed, ending turn", self.name);
                Action::end_turn()
            }),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ResourcePool, SideId};

    fn observation() -> Observation {
        Observation {
            side: SideId::Player,
            turn_number: 1,
            scale_points: 0,
            end_threshold: 10,
            resources: ResourcePool::new(1, 10),
            opponent_resources: ResourcePool::new(1, 10),
            hand: Vec::new(),
            max_hand: 6,
            board: vec![None; 4],
            opponent_board: vec![None; 4],
            opponent_hand_size: 0,
            deck_size: 0,
        }
    }

    #[test]
    fn test_forwards_queued_actions() {
        let (mut controller, input) = HumanController::channel("you");
        input.send(Action::play(1, 2)).unwrap();
        input.send(Action::end_turn()).unwrap();

        assert_eq!(controller.propose_action(&observation()), Action::play(1, 2));
        assert!(controller.propose_action(&observation()).is_end_turn());
    }

    #[test]
    fn test_disconnect_ends_turn() {
        let (mut controller, input) = HumanController::channel("you");
        drop(input);
        assert!(controller.propose_action(&observation()).is_end_turn());
    }

    #[test]
    fn test_timeout_ends_turn() {
        let (controller, _input) = HumanController::channel("you");
        let mut controller = controller.with_timeout(Duration::from_millis(5));
        assert!(controller.propose_action(&observation()).is_end_turn());
    }
}
