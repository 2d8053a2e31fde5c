//! Caller-side scheduler.
//!
//! The match never waits on anything; `MatchRunner` is the loop that asks
//! controllers for actions, steps the automatic phases and notifies an
//! observer along the way. It also owns the two stall guards: a per-window
//! action budget and an optional round limit.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::controllers::Controller;
use crate::core::{Action, PlayError, SequenceError, SideId, SideMap};
use crate::rules::{ActionOutcome, CombatReport, GameResult, Match, Phase, PhaseChange, StepEvent};

/// Hooks for presentation and bookkeeping.
///
/// Every method has a no-op default.
pub trait MatchObserver {
    /// An action window has opened for `side`.
    fn on_turn_start(&mut self, _game: &Match, _side: SideId) {}

    /// A proposal was submitted; `outcome` is the engine's verdict.
    fn on_action(
        &mut self,
        _game: &Match,
        _side: SideId,
        _action: Action,
        _outcome: Result<ActionOutcome, PlayError>,
    ) {
    }

    /// Combat resolved. Mutable so dead slots can be acknowledged.
    fn on_combat(&mut self, _game: &mut Match, _report: &CombatReport) {}

    fn on_match_end(&mut self, _game: &Match, _summary: &MatchSummary) {}
}

/// Observer that discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {}

/// Observer that clears death flags as soon as they are raised.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoAcknowledge {
    pub acknowledged: usize,
}

impl MatchObserver for AutoAcknowledge {
    fn on_combat(&mut self, game: &mut Match, _report: &CombatReport) {
        for side in SideId::ALL {
            for slot in game.dead_slots(side) {
                if game.acknowledge_death(side, slot) {
                    self.acknowledged += 1;
                }
            }
        }
    }
}

/// Runner limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Proposals allowed per window, rejected ones included. Once spent the
    /// runner ends the turn on the controller's behalf.
    pub max_actions_per_turn: u32,
    /// Stop with a draw after this many completed rounds.
    pub max_rounds: Option<u32>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_actions_per_turn: 8,
            max_rounds: None,
        }
    }
}

impl RunnerConfig {
    #[must_use]
    pub fn with_max_actions_per_turn(mut self, n: u32) -> Self {
        self.max_actions_per_turn = n;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }
}

/// How a run went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub result: GameResult,
    /// Turn number when the run stopped.
    pub rounds: u32,
    pub final_scale: i32,
    /// Accepted actions, end-turns included.
    pub actions: usize,
    pub rejected: u32,
    /// Cards lost per side.
    pub deaths: SideMap<u32>,
}

#[derive(Default)]
struct Tally {
    rejected: u32,
    deaths: SideMap<u32>,
}

/// Drives a match to completion.
#[derive(Clone, Debug, Default)]
pub struct MatchRunner {
    config: RunnerConfig,
}

impl MatchRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Play `game` from its current phase until it ends or hits the round
    /// limit.
    pub fn run<P, E, O>(
        &self,
        game: &mut Match,
        player: &mut P,
        enemy: &mut E,
        observer: &mut O,
    ) -> Result<MatchSummary, SequenceError>
    where
        P: Controller,
        E: Controller,
        O: MatchObserver,
    {
        let mut tally = Tally::default();

        loop {
            match game.phase() {
                Phase::AwaitingAction { side } => {
                    let controller: &mut dyn Controller = match side {
                        SideId::Player => &mut *player,
                        SideId::Enemy => &mut *enemy,
                    };
                    self.drive_window(game, side, controller, observer, &mut tally);
                }
                Phase::MatchEnded { winner } => {
                    return Ok(finish(game, GameResult::Winner(winner), &tally, observer));
                }
                Phase::ResolvingCombat { .. } | Phase::CheckingEndCondition { .. } | Phase::RoundAdvance => {
                    match game.step()? {
                        StepEvent::Combat(report) => {
                            for (side, slots) in report.deaths.iter() {
                                tally.deaths[side] += slots.len() as u32;
                            }
                            observer.on_combat(game, &report);
                        }
                        StepEvent::Phase(PhaseChange::RoundComplete) => {
                            if self.config.max_rounds.is_some_and(|limit| game.turn_number() >= limit) {
                                debug!("round limit reached at turn {}", game.turn_number());
                                return Ok(finish(game, GameResult::Draw, &tally, observer));
                            }
                        }
                        StepEvent::Phase(_) => {}
                    }
                }
            }
        }
    }

    /// Run one action window until `side` ends its turn.
    fn drive_window<O: MatchObserver>(
        &self,
        game: &mut Match,
        side: SideId,
        controller: &mut dyn Controller,
        observer: &mut O,
        tally: &mut Tally,
    ) {
        controller.begin_turn(&game.observe(side));
        observer.on_turn_start(game, side);

        let mut proposals = 0;
        while game.active_side() == Some(side) {
            let action = if proposals >= self.config.max_actions_per_turn {
                debug!(
                    "{} used {} proposals, ending turn",
                    controller.name(),
                    proposals
                );
                Action::end_turn()
            } else {
                controller.propose_action(&game.observe(side))
            };
            proposals += 1;

            let outcome = game.apply(side, action);
            observer.on_action(game, side, action, outcome);
            if let Err(error) = outcome {
                tally.rejected += 1;
                controller.on_rejected(action, error);
            }
        }
    }
}

fn finish<O: MatchObserver>(game: &Match, result: GameResult, tally: &Tally, observer: &mut O) -> MatchSummary {
    let summary = MatchSummary {
        result,
        rounds: game.turn_number(),
        final_scale: game.scale_points(),
        actions: game.history().len(),
        rejected: tally.rejected,
        deaths: tally.deaths.clone(),
    };
    info!(
        "run finished: {:?} after {} rounds, scale {}",
        summary.result, summary.rounds, summary.final_scale
    );
    observer.on_match_end(game, &summary);
    summary
}
