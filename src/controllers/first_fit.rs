use crate::core::Action;

use super::observation::Observation;
use super::traits::Controller;

/// Plays the first affordable card into the first free slot, otherwise
/// ends the turn.
#[derive(Clone, Debug)]
pub struct FirstFitController {
    name: String,
}

impl FirstFitController {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for FirstFitController {
    fn default() -> Self {
        Self::new("first-fit")
    }
}

impl Controller for FirstFitController {
    fn propose_action(&mut self, obs: &Observation) -> Action {
        let slot = obs.first_free_slot();
        let card = obs.affordable_hand_indices().first().copied();
        match (card, slot) {
            (Some(hand_index), Some(slot_index)) => Action::play(hand_index, slot_index),
            _ => Action::end_turn(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::controllers::CardView;
    use crate::core::{ResourcePool, SideId};

    fn view(cost: i32) -> CardView {
        CardView {
            id: CardId::new(1),
            attack: 1,
            cost,
            health: 1,
            max_health: 1,
        }
    }

    fn observation(costs: &[i32], board: Vec<Option<CardView>>) -> Observation {
        Observation {
            side: SideId::Enemy,
            turn_number: 1,
            scale_points: 0,
            end_threshold: 10,
            resources: ResourcePool::new(2, 10),
            opponent_resources: ResourcePool::new(2, 10),
            hand: costs.iter().map(|&c| view(c)).collect(),
            max_hand: 6,
            opponent_board: vec![None; board.len()],
            board,
            opponent_hand_size: 0,
            deck_size: 0,
        }
    }

    #[test]
    fn test_plays_first_affordable_into_first_free() {
        let mut controller = FirstFitController::default();
        let obs = observation(&[5, 2, 1], vec![Some(view(1)), None, None]);
        assert_eq!(controller.propose_action(&obs), Action::play(1, 1));
    }

    #[test]
    fn test_ends_turn_when_stuck() {
        let mut controller = FirstFitController::default();
        assert!(controller
            .propose_action(&observation(&[5], vec![None]))
            .is_end_turn());
        assert!(controller
            .propose_action(&observation(&[1], vec![Some(view(1))]))
            .is_end_turn());
    }
}
