//! Observation encoding for policy input.

use crate::controllers::{CardView, Observation};
use crate::core::{MatchConfig, SideId};
use crate::nn::traits::EncodedState;

/// Encodes observations into flat tensors.
pub trait StateEncoder: Send + Sync {
    /// Encode an observation. Hidden information never reaches the encoder.
    fn encode(&self, obs: &Observation) -> EncodedState;

    /// Shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;
}

/// Flat sensor layout:
///
/// | features | content |
/// |---|---|
/// | 1 | `scale_points / end_threshold` |
/// | 2 | player then enemy `current resource / resource_norm` |
/// | 3 per slot | player board: `(present, atk / stat_norm, hp / stat_norm)` |
/// | 3 per slot | enemy board, same layout |
/// | 4 per hand entry | own hand: `(present, cost, atk, hp)`, stats over `stat_norm` |
///
/// Boards are laid out player first regardless of who observes. Missing
/// slots and hand entries encode as zeros.
#[derive(Clone, Debug)]
pub struct ObservationEncoder {
    slot_count: usize,
    max_hand: usize,
    stat_norm: f32,
    resource_norm: f32,
}

const SLOT_FEATURES: usize = 3;
const HAND_FEATURES: usize = 4;

impl ObservationEncoder {
    pub fn new(slot_count: usize, max_hand: usize) -> Self {
        Self {
            slot_count,
            max_hand,
            stat_norm: 10.0,
            resource_norm: 10.0,
        }
    }

    /// Size the encoder to a match configuration.
    pub fn for_config(config: &MatchConfig) -> Self {
        Self::new(config.slot_count, config.max_hand)
    }

    pub fn with_stat_norm(mut self, norm: f32) -> Self {
        self.stat_norm = norm;
        self
    }

    pub fn with_resource_norm(mut self, norm: f32) -> Self {
        self.resource_norm = norm;
        self
    }

    #[must_use]
    pub fn feature_count(&self) -> usize {
        3 + 2 * SLOT_FEATURES * self.slot_count + HAND_FEATURES * self.max_hand
    }

    fn push_slot(&self, out: &mut Vec<f32>, card: Option<&CardView>) {
        match card {
            Some(card) => out.extend([
                1.0,
                card.attack as f32 / self.stat_norm,
                card.health as f32 / self.stat_norm,
            ]),
            None => out.extend([0.0; SLOT_FEATURES]),
        }
    }

    fn push_hand(&self, out: &mut Vec<f32>, card: Option<&CardView>) {
        match card {
            Some(card) => out.extend([
                1.0,
                card.cost as f32 / self.stat_norm,
                card.attack as f32 / self.stat_norm,
                card.health as f32 / self.stat_norm,
            ]),
            None => out.extend([0.0; HAND_FEATURES]),
        }
    }
}

impl StateEncoder for ObservationEncoder {
    fn encode(&self, obs: &Observation) -> EncodedState {
        let mut tensor = Vec::with_capacity(self.feature_count());

        let threshold = obs.end_threshold.max(1) as f32;
        tensor.push(obs.scale_points as f32 / threshold);
        for side in SideId::ALL {
            tensor.push(obs.resources_of(side).current() as f32 / self.resource_norm);
        }

        for side in SideId::ALL {
            let board = obs.board_of(side);
            for slot in 0..self.slot_count {
                self.push_slot(&mut tensor, board.get(slot).and_then(Option::as_ref));
            }
        }

        for index in 0..self.max_hand {
            self.push_hand(&mut tensor, obs.hand.get(index));
        }

        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![self.feature_count()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::ResourcePool;

    fn view(attack: i32, cost: i32, health: i32) -> CardView {
        CardView {
            id: CardId::new(1),
            attack,
            cost,
            health,
            max_health: health,
        }
    }

    fn observation(side: SideId) -> Observation {
        Observation {
            side,
            turn_number: 3,
            scale_points: -5,
            end_threshold: 10,
            resources: ResourcePool::new(3, 10),
            opponent_resources: ResourcePool::new(2, 10),
            hand: vec![view(4, 2, 6)],
            max_hand: 2,
            board: vec![Some(view(2, 1, 5)), None],
            opponent_board: vec![None, Some(view(3, 1, 1))],
            opponent_hand_size: 0,
            deck_size: 0,
        }
    }

    #[test]
    fn test_shape() {
        let encoder = ObservationEncoder::for_config(&MatchConfig::default());
        assert_eq!(encoder.output_shape(), vec![3 + 24 + 24]);
    }

    #[test]
    fn test_layout() {
        let encoder = ObservationEncoder::new(2, 2);
        let encoded = encoder.encode(&observation(SideId::Player));

        assert_eq!(
            encoded.tensor,
            vec![
                -0.5, 0.3, 0.2, // scale, resources
                1.0, 0.2, 0.5, 0.0, 0.0, 0.0, // player board
                0.0, 0.0, 0.0, 1.0, 0.3, 0.1, // enemy board
                1.0, 0.2, 0.4, 0.6, 0.0, 0.0, 0.0, 0.0, // hand
            ]
        );
    }

    #[test]
    fn test_enemy_perspective_keeps_absolute_boards() {
        let encoder = ObservationEncoder::new(2, 2);
        let encoded = encoder.encode(&observation(SideId::Enemy));

        // The observer's own pool is the enemy pool now.
        assert_eq!(encoded.get(1), Some(0.2));
        assert_eq!(encoded.get(2), Some(0.3));
        // Observer's board (slot 0 occupied) is encoded in the enemy block.
        assert_eq!(encoded.get(9), Some(1.0));
        assert_eq!(encoded.get(3), Some(0.0));
    }
}
