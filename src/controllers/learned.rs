use log::trace;

use crate::core::{Action, PlayError};
use crate::nn::{DecisionPolicy, ObservationEncoder, StateEncoder};

use super::observation::Observation;
use super::traits::Controller;

/// Controller backed by a trained policy.
///
/// Observations are encoded, the policy returns a discrete 3-tuple and the
/// tuple is decoded with [`Action::from_discrete`]. Out-of-range indices are
/// left for the match to reject.
#[derive(Debug)]
pub struct LearnedPolicyController<P, E = ObservationEncoder> {
    name: String,
    policy: P,
    encoder: E,
    rejections: u32,
}

impl<P: DecisionPolicy, E: StateEncoder> LearnedPolicyController<P, E> {
    pub fn new(name: impl Into<String>, policy: P, encoder: E) -> Self {
        Self {
            name: name.into(),
            policy,
            encoder,
            rejections: 0,
        }
    }

    /// Proposals the match refused so far.
    #[must_use]
    pub fn rejections(&self) -> u32 {
        self.rejections
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }
}

impl<P: DecisionPolicy, E: StateEncoder> Controller for LearnedPolicyController<P, E> {
    fn propose_action(&mut self, obs: &Observation) -> Action {
        let encoded = self.encoder.encode(obs);
        let raw = self.policy.decide(&encoded);
        trace!("{} policy output {:?}", self.name, raw);
        Action::from_discrete(raw)
    }

    fn on_rejected(&mut self, action: Action, error: PlayError) {
        self.rejections += 1;
        trace!("{} proposal {:?} rejected: {}", self.name, action, error);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
