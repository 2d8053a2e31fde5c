//! Scripted opponent with light randomness.
//!
//! Each window a single roll decides whether the controller plays at all.
//! When it does, it fills the first free slot (occasionally a random one)
//! with its best-scoring affordable card (occasionally a random one), up to
//! `max_actions_per_turn` plays.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Action, GameRng};

use super::observation::{CardView, Observation};
use super::traits::Controller;

/// Tuning knobs for [`HeuristicController`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Chance of playing anything this window.
    pub play_probability: f64,
    /// Chance of picking a random affordable card instead of the best one.
    pub random_play_rate: f64,
    /// Chance of picking a random free slot instead of the first.
    pub random_slot_rate: f64,
    pub max_actions_per_turn: u32,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            play_probability: 0.8,
            random_play_rate: 0.25,
            random_slot_rate: 0.2,
            max_actions_per_turn: 1,
        }
    }
}

impl HeuristicConfig {
    #[must_use]
    pub fn with_play_probability(mut self, p: f64) -> Self {
        self.play_probability = p;
        self
    }

    #[must_use]
    pub fn with_random_play_rate(mut self, p: f64) -> Self {
        self.random_play_rate = p;
        self
    }

    #[must_use]
    pub fn with_random_slot_rate(mut self, p: f64) -> Self {
        self.random_slot_rate = p;
        self
    }

    #[must_use]
    pub fn with_max_actions_per_turn(mut self, n: u32) -> Self {
        self.max_actions_per_turn = n;
        self
    }

    /// Never random: always plays, best card, first slot.
    #[must_use]
    pub fn greedy() -> Self {
        Self {
            play_probability: 1.0,
            random_play_rate: 0.0,
            random_slot_rate: 0.0,
            ..Self::default()
        }
    }
}

/// Greedy card value: `attack - 0.2 * cost + 0.1 * health`.
#[must_use]
pub fn card_score(card: &CardView) -> f64 {
    f64::from(card.attack) - 0.2 * f64::from(card.cost) + 0.1 * f64::from(card.health)
}

/// Highest-scoring hand index among `candidates`; ties go to the first.
fn best_card(obs: &Observation, candidates: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &index in candidates {
        let Some(card) = obs.hand.get(index) else {
            continue;
        };
        let score = card_score(card);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

/// Seeded scripted controller.
#[derive(Clone, Debug)]
pub struct HeuristicController {
    name: String,
    config: HeuristicConfig,
    rng: GameRng,
    plays_this_turn: bool,
    actions_this_turn: u32,
}

impl HeuristicController {
    pub fn new(name: impl Into<String>, config: HeuristicConfig, seed: u64) -> Self {
        Self {
            name: name.into(),
            config,
            rng: GameRng::new(seed),
            plays_this_turn: false,
            actions_this_turn: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    fn choose_slot(&mut self, obs: &Observation) -> Option<usize> {
        let free = obs.free_slots();
        if free.is_empty() {
            return None;
        }
        if self.rng.gen_bool(self.config.random_slot_rate) {
            self.rng.choose(&free).copied()
        } else {
            free.first().copied()
        }
    }

    fn choose_card(&mut self, obs: &Observation) -> Option<usize> {
        let playable = obs.affordable_hand_indices();
        if playable.is_empty() {
            return None;
        }
        if self.rng.gen_bool(self.config.random_play_rate) {
            self.rng.choose(&playable).copied()
        } else {
            best_card(obs, &playable)
        }
    }
}

impl Controller for HeuristicController {
    fn begin_turn(&mut self, obs: &Observation) {
        self.actions_this_turn = 0;
        self.plays_this_turn = self.rng.gen_bool(self.config.play_probability);
        if !self.plays_this_turn {
            debug!("{} passes turn {}", self.name, obs.turn_number);
        }
    }

    fn propose_action(&mut self, obs: &Observation) -> Action {
        if !self.plays_this_turn || self.actions_this_turn >= self.config.max_actions_per_turn {
            return Action::end_turn();
        }

        let Some(slot) = self.choose_slot(obs) else {
            return Action::end_turn();
        };
        let Some(card) = self.choose_card(obs) else {
            return Action::end_turn();
        };

        self.actions_this_turn += 1;
        Action::play(card, slot)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
