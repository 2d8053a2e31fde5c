//! Match rules: the phase machine, combat resolution and match assembly.
//!
//! - [`Phase`]: where a match is in its round
//! - [`resolve_combat`]: simultaneous lane combat between two boards
//! - [`Match`]: the engine that owns both sides and drives the phases
//! - [`MatchBuilder`]: resolves deck specs against a catalog

pub mod builder;
pub mod combat;
pub mod engine;
pub mod phase;

pub use builder::MatchBuilder;
pub use combat::{resolve_combat, Combatant, CombatReport, SlotOutcome};
pub use engine::{ActionOutcome, GameResult, Match, PhaseChange, StepEvent};
pub use phase::Phase;
