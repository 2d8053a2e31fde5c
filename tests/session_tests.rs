//! Runner and observer tests.

use scale_duel::cards::{CardCatalog, CardDefinition, CardId, DeckSpec};
use scale_duel::controllers::{FirstFitController, HeuristicConfig, HeuristicController};
use scale_duel::core::{Action, PlayError, SideId};
use scale_duel::rules::{ActionOutcome, CombatReport, GameResult, Match, MatchBuilder, Phase};
use scale_duel::session::{AutoAcknowledge, MatchObserver, MatchRunner, MatchSummary, NoopObserver, RunnerConfig};

fn single_card_match(attack: i32, cost: i32, health: i32) -> Match {
    let catalog = CardCatalog::from_definitions([CardDefinition::new(CardId::new(1), "Unit", attack, cost, health)]).unwrap();
    MatchBuilder::new(&catalog)
        .player_deck(DeckSpec::new(vec![CardId::new(1)]))
        .enemy_deck(DeckSpec::new(vec![CardId::new(1)]))
        .seed(17)
        .build()
        .unwrap()
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    combats: usize,
    flagged_at_combat: usize,
    ended: Option<MatchSummary>,
}

impl MatchObserver for Recorder {
    fn on_turn_start(&mut self, game: &Match, side: SideId) {
        self.events.push(format!("turn {} {}", game.turn_number(), side));
    }

    fn on_action(&mut self, _game: &Match, side: SideId, action: Action, outcome: Result<ActionOutcome, PlayError>) {
        let verdict = if outcome.is_ok() { "ok" } else { "rejected" };
        self.events.push(format!("{} {:?} {}", side, action.action_type, verdict));
    }

    fn on_combat(&mut self, game: &mut Match, report: &CombatReport) {
        self.combats += 1;
        self.flagged_at_combat += SideId::ALL.iter().map(|&s| game.dead_slots(s).len()).sum::<usize>();
        self.events.push(format!("combat {}", report.attacker));
    }

    fn on_match_end(&mut self, _game: &Match, summary: &MatchSummary) {
        self.ended = Some(summary.clone());
    }
}

/// Windows alternate player-first and each is followed by one combat.
#[test]
fn test_observer_event_order() {
    let mut game = single_card_match(1, 5, 1);
    let mut recorder = Recorder::default();

    MatchRunner::new(RunnerConfig::default().with_max_rounds(1))
        .run(&mut game, &mut FirstFitController::default(), &mut FirstFitController::default(), &mut recorder)
        .unwrap();

    assert_eq!(
        recorder.events,
        vec![
            "turn 1 Player",
            "Player EndTurn ok",
            "combat Player",
            "turn 1 Enemy",
            "Enemy EndTurn ok",
            "combat Enemy",
        ]
    );
    let summary = recorder.ended.unwrap();
    assert_eq!(summary.result, GameResult::Draw);
    assert_eq!(summary.rounds, 1);
}

/// A decisive run stops in `MatchEnded` and reports the winner.
#[test]
fn test_run_to_victory() {
    // Cost-0 attackers: the player fills the board first and wins on its first resolution.
    let mut game = single_card_match(3, 0, 3);

    let summary = MatchRunner::default()
        .run(&mut game, &mut FirstFitController::default(), &mut FirstFitController::default(), &mut NoopObserver)
        .unwrap();

    assert_eq!(summary.result, GameResult::Winner(SideId::Player));
    assert_eq!(game.phase(), Phase::MatchEnded { winner: SideId::Player });
    assert_eq!(summary.final_scale, -12);
    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.actions, 5);
}

/// `AutoAcknowledge` clears every flag raised by a combat.
#[test]
fn test_auto_acknowledge_clears_flags() {
    let mut game = single_card_match(1, 0, 1);
    let mut observer = AutoAcknowledge::default();
    let runner = MatchRunner::new(RunnerConfig::default().with_max_rounds(4));

    let summary = runner
        .run(
            &mut game,
            &mut HeuristicController::new("p", HeuristicConfig::greedy(), 1),
            &mut HeuristicController::new("e", HeuristicConfig::greedy(), 2),
            &mut observer,
        )
        .unwrap();

    let total_deaths = summary.deaths[SideId::Player] + summary.deaths[SideId::Enemy];
    assert_eq!(observer.acknowledged as u32, total_deaths);
    for side in SideId::ALL {
        assert!(game.dead_slots(side).is_empty());
    }
}

/// Without acknowledgement, flags survive and are visible to observers.
#[test]
fn test_unacknowledged_flags_accumulate() {
    let mut game = single_card_match(1, 0, 1);
    let mut recorder = Recorder::default();

    let summary = MatchRunner::new(RunnerConfig::default().with_max_rounds(4))
        .run(
            &mut game,
            &mut HeuristicController::new("p", HeuristicConfig::greedy(), 1),
            &mut HeuristicController::new("e", HeuristicConfig::greedy(), 2),
            &mut recorder,
        )
        .unwrap();

    let total_deaths = summary.deaths[SideId::Player] + summary.deaths[SideId::Enemy];
    assert!(total_deaths > 0);
    let flagged: usize = SideId::ALL.iter().map(|&s| game.dead_slots(s).len()).sum();
    assert!(flagged > 0);
    assert!(flagged as u32 <= total_deaths);
}

/// A reset match can be run again from the top.
#[test]
fn test_reset_then_rerun() {
    let mut game = single_card_match(3, 0, 3);
    let runner = MatchRunner::default();

    runner
        .run(&mut game, &mut FirstFitController::default(), &mut FirstFitController::default(), &mut NoopObserver)
        .unwrap();
    game.reset_game().unwrap();

    assert_eq!(game.phase(), Phase::AwaitingAction { side: SideId::Player });
    assert_eq!(game.scale_points(), 0);
    assert_eq!(game.side(SideId::Player).hand().len(), 4);

    let summary = runner
        .run(&mut game, &mut FirstFitController::default(), &mut FirstFitController::default(), &mut NoopObserver)
        .unwrap();
    assert_eq!(summary.result, GameResult::Winner(SideId::Player));
}

/// Runner config deserializes with defaults for missing fields.
#[test]
fn test_runner_config_serde() {
    let config: RunnerConfig = serde_json::from_str(r#"{"max_rounds": 12}"#).unwrap();
    assert_eq!(config.max_rounds, Some(12));
    assert_eq!(config.max_actions_per_turn, 8);

    let json = serde_json::to_string(&RunnerConfig::default()).unwrap();
    let back: RunnerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, RunnerConfig::default());
}
