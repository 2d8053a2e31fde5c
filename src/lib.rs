//! # scale-duel
//!
//! A two-sided lane card battler engine with pluggable controllers.
//!
//! ## Design Principles
//!
//! 1. **Explicit phase machine**: every round is two action windows, each
//!    followed by a simultaneous combat resolution. Misuse of the machine is
//!    a `SequenceError`, never a panic.
//!
//! 2. **Engine as legality authority**: controllers only propose actions.
//!    The match validates every proposal; a rejected proposal is a no-op.
//!
//! 3. **Deterministic**: deck shuffles and scripted controllers draw from
//!    seeded ChaCha8 streams, so the same seed replays the same match.
//!
//! ## Rules in brief
//!
//! Each side fields cards into a fixed row of slots. When a window closes,
//! facing cards trade damage and every unopposed card of the closing side
//! pushes a shared scale toward the opponent. The first side to push the
//! scale to the threshold wins: `-threshold` for the player, `+threshold`
//! for the enemy.
//!
//! ## Modules
//!
//! - `core`: sides, configuration, RNG, actions, errors, per-side state
//! - `cards`: definitions, instances, the catalog and deck building
//! - `zones`: hand and board
//! - `rules`: phases, combat and the `Match` engine
//! - `controllers`: the `Controller` trait and its implementations
//! - `nn`: observation encoding and the policy seam
//! - `session`: the `MatchRunner` loop and observer hooks
//!
//! ## Example
//!
//! ```
//! use scale_duel::prelude::*;
//!
//! let catalog = CardCatalog::from_definitions([
//!     CardDefinition::new(CardId::new(1), "Squire", 1, 1, 2),
//!     CardDefinition::new(CardId::new(2), "Knight", 3, 2, 3),
//!     CardDefinition::new(CardId::new(3), "Ogre", 5, 4, 6),
//! ])
//! .unwrap();
//! let deck = DeckSpec::new(vec![CardId::new(1), CardId::new(2), CardId::new(3)]);
//!
//! let mut game = MatchBuilder::new(&catalog)
//!     .player_deck(deck.clone())
//!     .enemy_deck(deck)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let mut player = HeuristicController::new("player", HeuristicConfig::greedy(), 1);
//! let mut enemy = HeuristicController::new("enemy", HeuristicConfig::default(), 2);
//! let runner = MatchRunner::new(RunnerConfig::default().with_max_rounds(50));
//!
//! let summary = runner
//!     .run(&mut game, &mut player, &mut enemy, &mut AutoAcknowledge::default())
//!     .unwrap();
//! assert!(summary.rounds <= 50);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod controllers;
pub mod nn;
pub mod session;

pub use crate::core::{
    Action, ActionRecord, ActionType, CatalogError, ConfigError, EmptyDeck, GameRng, MatchConfig,
    PlayError, ResourcePool, SequenceError, SetupError, SideId, SideMap, SideState,
};

pub use crate::cards::{
    build_deck, CardCatalog, CardDefinition, CardId, CardInstance, Deck, DeckLibrary, DeckRecipe,
    DeckSpec,
};

pub use crate::zones::{Board, Hand};

pub use crate::rules::{
    resolve_combat, ActionOutcome, CombatReport, GameResult, Match, MatchBuilder, Phase, PhaseChange,
    SlotOutcome, StepEvent,
};

pub use crate::controllers::{
    CardView, Controller, FirstFitController, HeuristicConfig, HeuristicController, HumanController,
    LearnedPolicyController, Observation,
};

pub use crate::nn::{DecisionPolicy, EncodedState, FixedPolicy, ObservationEncoder, StateEncoder};

pub use crate::session::{AutoAcknowledge, MatchObserver, MatchRunner, MatchSummary, NoopObserver, RunnerConfig};

/// Convenient glob import for setting up and running matches.
pub mod prelude {
    pub use crate::cards::{CardCatalog, CardDefinition, CardId, DeckLibrary, DeckSpec};
    pub use crate::controllers::{
        Controller, FirstFitController, HeuristicConfig, HeuristicController, HumanController,
        LearnedPolicyController, Observation,
    };
    pub use crate::core::{Action, MatchConfig, PlayError, SideId};
    pub use crate::rules::{GameResult, Match, MatchBuilder, Phase};
    pub use crate::session::{AutoAcknowledge, MatchObserver, MatchRunner, NoopObserver, RunnerConfig};
}
