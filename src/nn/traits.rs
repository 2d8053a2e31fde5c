//! Policy interface for learned controllers.
//!
//! A policy maps an encoded observation to a discrete 3-tuple
//! `[action_type, hand_index, slot_index]`. Inference runs wherever the
//! implementor likes; the engine only sees the tuple.

use serde::{Deserialize, Serialize};

/// Encoded observation as a flat tensor for policy input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor (e.g. `[features]`).
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Set element at a flat index. Out-of-range writes are ignored.
    pub fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.tensor.get_mut(index) {
            *slot = value;
        }
    }
}

/// Produces discrete decisions from encoded observations.
pub trait DecisionPolicy: Send {
    /// Decide on `[action_type, hand_index, slot_index]`.
    ///
    /// `action_type == 0` ends the turn; anything else plays a card.
    fn decide(&mut self, encoded: &EncodedState) -> [usize; 3];
}

impl<F> DecisionPolicy for F
where
    F: FnMut(&EncodedState) -> [usize; 3] + Send,
{
    fn decide(&mut self, encoded: &EncodedState) -> [usize; 3] {
        self(encoded)
    }
}

/// Always returns the same tuple (baseline for testing).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedPolicy {
    decision: [usize; 3],
}

impl FixedPolicy {
    pub fn new(decision: [usize; 3]) -> Self {
        Self { decision }
    }

    /// A policy that always ends the turn.
    pub fn end_turn() -> Self {
        Self::new([0, 0, 0])
    }
}

impl DecisionPolicy for FixedPolicy {
    fn decide(&mut self, _encoded: &EncodedState) -> [usize; 3] {
        self.decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_state_new() {
        let state = EncodedState::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
        assert_eq!(state.len(), 4);
        assert_eq!(state.get(3), Some(4.0));
        assert_eq!(state.get(4), None);
    }

    #[test]
    fn test_encoded_state_set_ignores_out_of_range() {
        let mut state = EncodedState::zeros(vec![3]);
        state.set(1, 5.0);
        state.set(9, 1.0);
        assert_eq!(state.tensor, vec![0.0, 5.0, 0.0]);
    }

    #[test]
    fn test_fixed_policy() {
        let mut policy = FixedPolicy::new([1, 2, 3]);
        assert_eq!(policy.decide(&EncodedState::zeros(vec![1])), [1, 2, 3]);
        assert_eq!(FixedPolicy::end_turn().decide(&EncodedState::zeros(vec![1])), [0, 0, 0]);
    }

    #[test]
    fn test_closure_policy() {
        let mut calls = 0;
        let mut policy = |state: &EncodedState| {
            calls += 1;
            [1, state.len(), 0]
        };
        assert_eq!(policy.decide(&EncodedState::zeros(vec![4])), [1, 4, 0]);
        drop(policy);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_serialization() {
        let state = EncodedState::new(vec![1.0, 2.0, 3.0], vec![3]);
        let json = serde_json::to_string(&state).unwrap();
        let back: EncodedState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
