//! The match: an explicit phase machine over two sides.
//!
//! `Match` is the single authority over turn order, legality and combat.
//! Controllers only ever propose actions through [`Match::apply`]; the
//! automatic phases are driven by [`Match::step`] (or the individual
//! operations it dispatches to).

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::combat::{resolve_combat, CombatReport};
use super::phase::Phase;
use crate::cards::DeckRecipe;
use crate::controllers::observation::{board_view, CardView, Observation};
use crate::core::{
    Action, ActionRecord, ActionType, ConfigError, GameRng, MatchConfig, PlayError, SequenceError,
    SideId, SideMap, SideState,
};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One side pushed the scale past the threshold.
    Winner(SideId),
    /// Stopped by an external round limit.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: SideId) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }

    #[must_use]
    pub fn winner(&self) -> Option<SideId> {
        match self {
            GameResult::Winner(side) => Some(*side),
            GameResult::Draw => None,
        }
    }
}

/// What an accepted controller action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Played { hand_index: usize, slot_index: usize },
    TurnEnded,
}

/// Transition produced by the end-condition check or the round advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseChange {
    /// `side` now holds the action window after drawing `drawn` cards.
    TurnStarted { side: SideId, drawn: usize },
    /// Both windows of the round are done; `advance_round` is pending.
    RoundComplete,
    MatchEnded(GameResult),
}

/// One automatic phase, as run by [`Match::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepEvent {
    Combat(CombatReport),
    Phase(PhaseChange),
}

/// A running match.
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    recipes: SideMap<DeckRecipe>,
    rng: GameRng,
    sides: SideMap<SideState>,
    phase: Phase,
    turn_number: u32,
    scale_points: i32,
    dead_slots: SideMap<SmallVec<[bool; 8]>>,
    history: Vector<ActionRecord>,
}

impl Match {
    /// Start a match from resolved deck recipes.
    ///
    /// Each side gets a freshly shuffled deck and an opening hand; the player
    /// holds the first action window.
    pub fn new(config: MatchConfig, recipes: SideMap<DeckRecipe>, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let sides = deal(&config, &recipes, &mut rng);
        let dead_slots = SideMap::with_value(SmallVec::from_elem(false, config.slot_count));

        info!(
            "match initialized: seed {}, {} slots, threshold {}, decks {}/{}",
            seed,
            config.slot_count,
            config.end_threshold,
            sides[SideId::Player].deck().len(),
            sides[SideId::Enemy].deck().len()
        );

        Ok(Self {
            config,
            recipes,
            rng,
            sides,
            phase: Phase::AwaitingAction { side: SideId::Player },
            turn_number: 1,
            scale_points: 0,
            dead_slots,
            history: Vector::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Net lane pressure; negative favors the player.
    #[must_use]
    pub fn scale_points(&self) -> i32 {
        self.scale_points
    }

    #[must_use]
    pub fn side(&self, side: SideId) -> &SideState {
        &self.sides[side]
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The side holding the action window, if any.
    #[must_use]
    pub fn active_side(&self) -> Option<SideId> {
        self.phase.active_side()
    }

    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.active_side() == Some(SideId::Player)
    }

    // === Controller actions ===

    /// Play a card for `side`.
    ///
    /// Only valid while `side` holds the action window. Never resolves
    /// combat. A rejected play changes nothing.
    pub fn play_card(&mut self, side: SideId, hand_index: usize, slot_index: usize) -> Result<(), PlayError> {
        self.require_window(side)?;
        self.sides[side].place_card(hand_index, slot_index)?;
        self.record(side, Action::play(hand_index, slot_index));
        Ok(())
    }

    /// Close `side`'s action window. Combat becomes pending.
    pub fn end_turn(&mut self, side: SideId) -> Result<(), PlayError> {
        self.require_window(side)?;
        self.record(side, Action::end_turn());
        self.set_phase(Phase::ResolvingCombat { attacker: side });
        Ok(())
    }

    /// Validate and apply a controller proposal.
    pub fn apply(&mut self, side: SideId, action: Action) -> Result<ActionOutcome, PlayError> {
        match action.action_type {
            ActionType::EndTurn => {
                self.end_turn(side)?;
                Ok(ActionOutcome::TurnEnded)
            }
            ActionType::PlayCard => {
                self.play_card(side, action.hand_index, action.slot_index)?;
                Ok(ActionOutcome::Played {
                    hand_index: action.hand_index,
                    slot_index: action.slot_index,
                })
            }
        }
    }

    // === Automatic phases ===

    /// Resolve the pending combat.
    ///
    /// All slot pairs trade damage simultaneously; unopposed attacker cards
    /// move the scale. Dead cards leave the board and their slots are flagged
    /// until acknowledged.
    pub fn end_round(&mut self) -> Result<CombatReport, SequenceError> {
        let Phase::ResolvingCombat { attacker } = self.phase else {
            return Err(self.wrong_phase("end_round"));
        };

        let (player, enemy) = self.sides.both_mut();
        let mut report = resolve_combat(player.board_mut(), enemy.board_mut(), attacker);

        self.scale_points = self.scale_points.saturating_add(report.scale_delta);
        report.scale_after = self.scale_points;

        for (side, slots) in report.deaths.iter() {
            for &slot in slots {
                if let Some(flag) = self.dead_slots[side].get_mut(slot) {
                    *flag = true;
                }
            }
        }

        debug!(
            "turn {} combat ({} attacking): scale {:+} -> {}, {} died",
            self.turn_number,
            attacker,
            report.scale_delta,
            self.scale_points,
            report.death_count()
        );

        self.set_phase(Phase::CheckingEndCondition { attacker });
        Ok(report)
    }

    /// Decide whether the match is over, otherwise move to the next window.
    pub fn check_end_condition(&mut self) -> Result<PhaseChange, SequenceError> {
        let Phase::CheckingEndCondition { attacker } = self.phase else {
            return Err(self.wrong_phase("check_end_condition"));
        };

        if let Some(winner) = self.winner() {
            self.set_phase(Phase::MatchEnded { winner });
            info!(
                "match ended on turn {}: {} wins at scale {}",
                self.turn_number, winner, self.scale_points
            );
            return Ok(PhaseChange::MatchEnded(GameResult::Winner(winner)));
        }

        match attacker {
            SideId::Player => {
                let drawn = self.open_window(SideId::Enemy);
                Ok(PhaseChange::TurnStarted {
                    side: SideId::Enemy,
                    drawn,
                })
            }
            SideId::Enemy => {
                self.set_phase(Phase::RoundAdvance);
                Ok(PhaseChange::RoundComplete)
            }
        }
    }

    /// Start the next round: bump the turn number, grow and refill both
    /// pools, and hand the window to the player.
    pub fn advance_round(&mut self) -> Result<PhaseChange, SequenceError> {
        if self.phase != Phase::RoundAdvance {
            return Err(self.wrong_phase("advance_round"));
        }

        self.turn_number += 1;
        for (_, side) in self.sides.iter_mut() {
            side.resources_mut().grow_and_refill();
        }

        let drawn = self.open_window(SideId::Player);
        Ok(PhaseChange::TurnStarted {
            side: SideId::Player,
            drawn,
        })
    }

    /// Run whichever automatic phase is pending.
    pub fn step(&mut self) -> Result<StepEvent, SequenceError> {
        match self.phase {
            Phase::ResolvingCombat { .. } => self.end_round().map(StepEvent::Combat),
            Phase::CheckingEndCondition { .. } => self.check_end_condition().map(StepEvent::Phase),
            Phase::RoundAdvance => self.advance_round().map(StepEvent::Phase),
            Phase::AwaitingAction { .. } | Phase::MatchEnded { .. } => Err(self.wrong_phase("step")),
        }
    }

    // === End condition ===

    /// The match is decided once the scale reaches the threshold either way.
    #[must_use]
    pub fn game_ended(&self) -> bool {
        self.winner().is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<SideId> {
        let threshold = self.config.end_threshold;
        if self.scale_points <= -threshold {
            Some(SideId::Player)
        } else if self.scale_points >= threshold {
            Some(SideId::Enemy)
        } else {
            None
        }
    }

    /// Final result, once the phase machine has reached `MatchEnded`.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::MatchEnded { winner } => Some(GameResult::Winner(winner)),
            _ => None,
        }
    }

    // === Death notifications ===

    /// Slots emptied by combat and not yet acknowledged, ascending.
    #[must_use]
    pub fn dead_slots(&self, side: SideId) -> Vec<usize> {
        self.dead_slots[side]
            .iter()
            .enumerate()
            .filter(|&(_, &dead)| dead)
            .map(|(i, _)| i)
            .collect()
    }

    /// Clear a death flag. Returns whether a flag was set.
    pub fn acknowledge_death(&mut self, side: SideId, slot: usize) -> bool {
        match self.dead_slots[side].get_mut(slot) {
            Some(flag) if *flag => {
                *flag = false;
                true
            }
            _ => false,
        }
    }

    // === Lifecycle ===

    /// Throw away the current match and deal a fresh one.
    ///
    /// Decks are rebuilt from the same recipes with a new shuffle. Refused
    /// while a combat resolution is in flight.
    pub fn reset_game(&mut self) -> Result<(), SequenceError> {
        if matches!(
            self.phase,
            Phase::ResolvingCombat { .. } | Phase::CheckingEndCondition { .. }
        ) {
            return Err(self.wrong_phase("reset_game"));
        }

        self.sides = deal(&self.config, &self.recipes, &mut self.rng);
        self.phase = Phase::AwaitingAction { side: SideId::Player };
        self.turn_number = 1;
        self.scale_points = 0;
        for (_, flags) in self.dead_slots.iter_mut() {
            flags.iter_mut().for_each(|flag| *flag = false);
        }
        self.history = Vector::new();

        info!("match reset");
        Ok(())
    }

    /// Snapshot of what `side` may see.
    #[must_use]
    pub fn observe(&self, side: SideId) -> Observation {
        let own = &self.sides[side];
        let opponent = &self.sides[side.opponent()];

        Observation {
            side,
            turn_number: self.turn_number,
            scale_points: self.scale_points,
            end_threshold: self.config.end_threshold,
            resources: *own.resources(),
            opponent_resources: *opponent.resources(),
            hand: own.hand().iter().map(CardView::from).collect(),
            max_hand: own.hand().capacity(),
            board: board_view(own.board()),
            opponent_board: board_view(opponent.board()),
            opponent_hand_size: opponent.hand().len(),
            deck_size: own.deck().len(),
        }
    }

    // === Internals ===

    fn require_window(&self, side: SideId) -> Result<(), PlayError> {
        match self.phase {
            Phase::AwaitingAction { side: active } if active == side => Ok(()),
            Phase::MatchEnded { .. } => Err(PlayError::MatchEnded),
            _ => Err(PlayError::NotYourTurn(side)),
        }
    }

    fn wrong_phase(&self, operation: &'static str) -> SequenceError {
        SequenceError::WrongPhase {
            operation,
            phase: self.phase,
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!("phase {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    fn open_window(&mut self, side: SideId) -> usize {
        let drawn = self.sides[side].draw_to_hand(self.config.draws_per_turn);
        debug!("{} draws {} at the start of their window", side, drawn);
        self.set_phase(Phase::AwaitingAction { side });
        drawn
    }

    fn record(&mut self, side: SideId, action: Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(side, action, self.turn_number, sequence));
    }
}

/// Build both sides from fresh shuffles and draw opening hands.
fn deal(config: &MatchConfig, recipes: &SideMap<DeckRecipe>, rng: &mut GameRng) -> SideMap<SideState> {
    let stream = rng.fork();
    SideMap::new(|side| {
        let context = match side {
            SideId::Player => "player-deck",
            SideId::Enemy => "enemy-deck",
        };
        let deck = recipes[side].build(&mut stream.for_context(context));
        let mut state = SideState::new(side.to_string(), config, deck);
        let drawn = state.draw_to_hand(config.initial_hand);
        debug!("{} opens with {} cards ({} left in deck)", side, drawn, state.deck().len());
        state
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId};
    use std::sync::Arc;

    fn recipe(id: u32, attack: i32, cost: i32, health: i32) -> DeckRecipe {
        DeckRecipe {
            pool: vec![Arc::new(CardDefinition::new(CardId::new(id), format!("C{id}"), attack, cost, health))],
            desired_size: 20,
            repeat_factor: 1,
        }
    }

    fn game(player: DeckRecipe, enemy: DeckRecipe) -> Match {
        Match::new(MatchConfig::default(), SideMap::from_pair(player, enemy), 7).unwrap()
    }

    fn run_automatic(game: &mut Match) {
        while game.phase().is_automatic() {
            game.step().unwrap();
        }
    }

    #[test]
    fn test_opening_state() {
        let game = game(recipe(1, 1, 1, 1), recipe(2, 1, 1, 1));

        assert_eq!(game.phase(), Phase::AwaitingAction { side: SideId::Player });
        assert_eq!(game.turn_number(), 1);
        assert_eq!(game.scale_points(), 0);
        for side in SideId::ALL {
            assert_eq!(game.side(side).hand().len(), 4);
            assert_eq!(game.side(side).deck().len(), 16);
            assert_eq!(game.side(side).resources().current(), 1);
        }
        assert!(game.is_player_turn());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MatchConfig::default().with_slot_count(0);
        let recipes = SideMap::from_pair(recipe(1, 1, 1, 1), recipe(2, 1, 1, 1));
        assert_eq!(Match::new(config, recipes, 0).unwrap_err(), ConfigError::NoSlots);
    }

    #[test]
    fn test_full_round_flow() {
        let mut game = game(recipe(1, 1, 0, 1), recipe(2, 1, 0, 1));

        game.end_turn(SideId::Player).unwrap();
        assert_eq!(game.phase(), Phase::ResolvingCombat { attacker: SideId::Player });

        assert!(matches!(game.step().unwrap(), StepEvent::Combat(_)));
        assert_eq!(
            game.step().unwrap(),
            StepEvent::Phase(PhaseChange::TurnStarted {
                side: SideId::Enemy,
                drawn: 1
            })
        );
        assert_eq!(game.side(SideId::Enemy).hand().len(), 5);

        game.end_turn(SideId::Enemy).unwrap();
        game.step().unwrap();
        assert_eq!(game.step().unwrap(), StepEvent::Phase(PhaseChange::RoundComplete));
        assert_eq!(
            game.step().unwrap(),
            StepEvent::Phase(PhaseChange::TurnStarted {
                side: SideId::Player,
                drawn: 1
            })
        );

        assert_eq!(game.turn_number(), 2);
        assert_eq!(game.side(SideId::Player).resources().max(), 2);
        assert_eq!(game.side(SideId::Enemy).resources().current(), 2);
        assert_eq!(game.side(SideId::Player).hand().len(), 5);
    }

    #[test]
    fn test_actions_outside_window() {
        let mut game = game(recipe(1, 1, 0, 1), recipe(2, 1, 0, 1));

        assert_eq!(game.play_card(SideId::Enemy, 0, 0), Err(PlayError::NotYourTurn(SideId::Enemy)));
        assert_eq!(game.end_turn(SideId::Enemy), Err(PlayError::NotYourTurn(SideId::Enemy)));

        game.end_turn(SideId::Player).unwrap();
        assert_eq!(game.play_card(SideId::Player, 0, 0), Err(PlayError::NotYourTurn(SideId::Player)));
        assert!(game.side(SideId::Player).board().occupied_count() == 0);
    }

    #[test]
    fn test_sequence_errors_leave_state() {
        let mut game = game(recipe(1, 1, 0, 1), recipe(2, 1, 0, 1));

        let err = game.end_round().unwrap_err();
        assert_eq!(
            err,
            SequenceError::WrongPhase {
                operation: "end_round",
                phase: Phase::AwaitingAction { side: SideId::Player }
            }
        );
        assert!(game.check_end_condition().is_err());
        assert!(game.advance_round().is_err());
        assert!(game.step().is_err());
        assert_eq!(game.phase(), Phase::AwaitingAction { side: SideId::Player });
        assert_eq!(game.turn_number(), 1);
    }

    #[test]
    fn test_unopposed_attack_scores_for_attacker_only() {
        let mut game = game(recipe(1, 4, 0, 3), recipe(2, 1, 0, 1));

        game.play_card(SideId::Player, 0, 0).unwrap();
        game.end_turn(SideId::Player).unwrap();
        let report = game.end_round().unwrap();
        assert_eq!(report.scale_delta, -4);
        assert_eq!(report.scale_after, -4);
        game.check_end_condition().unwrap();

        game.end_turn(SideId::Enemy).unwrap();
        let report = game.end_round().unwrap();
        assert_eq!(report.scale_delta, 0);
        assert_eq!(game.scale_points(), -4);
    }

    #[test]
    fn test_reaching_threshold_ends_match() {
        let mut game = game(recipe(1, 10, 0, 1), recipe(2, 1, 0, 1));

        game.play_card(SideId::Player, 0, 0).unwrap();
        game.end_turn(SideId::Player).unwrap();
        game.end_round().unwrap();
        assert!(game.game_ended());

        assert_eq!(
            game.check_end_condition().unwrap(),
            PhaseChange::MatchEnded(GameResult::Winner(SideId::Player))
        );
        assert_eq!(game.result(), Some(GameResult::Winner(SideId::Player)));
        assert_eq!(game.play_card(SideId::Player, 0, 1), Err(PlayError::MatchEnded));
        assert!(game.advance_round().is_err());
    }

    #[test]
    fn test_dead_slots_and_acknowledge() {
        let mut game = game(recipe(1, 3, 0, 2), recipe(2, 5, 0, 4));

        game.end_turn(SideId::Player).unwrap();
        run_automatic(&mut game);
        game.play_card(SideId::Enemy, 0, 1).unwrap();
        game.end_turn(SideId::Enemy).unwrap();
        run_automatic(&mut game);

        game.play_card(SideId::Player, 0, 1).unwrap();
        game.end_turn(SideId::Player).unwrap();
        game.end_round().unwrap();

        assert_eq!(game.dead_slots(SideId::Player), vec![1]);
        assert!(game.dead_slots(SideId::Enemy).is_empty());
        assert_eq!(game.side(SideId::Enemy).board().get(1).unwrap().current_health(), 1);

        assert!(game.acknowledge_death(SideId::Player, 1));
        assert!(!game.acknowledge_death(SideId::Player, 1));
        assert!(!game.acknowledge_death(SideId::Player, 99));
        assert!(game.dead_slots(SideId::Player).is_empty());
    }

    #[test]
    fn test_history_records_accepted_actions_only() {
        let mut game = game(recipe(1, 1, 1, 1), recipe(2, 1, 1, 1));

        game.play_card(SideId::Player, 0, 0).unwrap();
        assert!(game.play_card(SideId::Player, 0, 1).is_err());
        game.end_turn(SideId::Player).unwrap();

        let history: Vec<_> = game.history().iter().cloned().collect();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].action, Action::play(0, 0));
        assert_eq!(history[1].action, Action::end_turn());
        assert_eq!(history[1].sequence, 1);
    }

    #[test]
    fn test_reset_restores_opening() {
        let mut game = game(recipe(1, 2, 0, 2), recipe(2, 1, 0, 1));

        game.play_card(SideId::Player, 0, 0).unwrap();
        game.end_turn(SideId::Player).unwrap();
        assert!(game.reset_game().is_err());
        game.end_round().unwrap();
        assert!(game.reset_game().is_err());
        game.check_end_condition().unwrap();

        game.reset_game().unwrap();

        assert_eq!(game.phase(), Phase::AwaitingAction { side: SideId::Player });
        assert_eq!(game.turn_number(), 1);
        assert_eq!(game.scale_points(), 0);
        assert!(game.history().is_empty());
        for side in SideId::ALL {
            assert_eq!(game.side(side).board().occupied_count(), 0);
            assert_eq!(game.side(side).hand().len(), 4);
            assert!(game.dead_slots(side).is_empty());
        }
    }

    #[test]
    fn test_observe_hides_opponent_hand() {
        let game = game(recipe(1, 2, 1, 3), recipe(2, 1, 1, 1));
        let obs = game.observe(SideId::Enemy);

        assert_eq!(obs.side, SideId::Enemy);
        assert_eq!(obs.hand.len(), 4);
        assert!(obs.hand.iter().all(|c| c.id == CardId::new(2)));
        assert_eq!(obs.opponent_hand_size, 4);
        assert_eq!(obs.slot_count(), 4);
        assert_eq!(obs.max_hand, 6);
    }
}
