//! Running matches end to end.
//!
//! - [`MatchRunner`]: the scheduler loop
//! - [`MatchObserver`]: presentation hooks (`NoopObserver`, `AutoAcknowledge`)
//! - [`MatchSummary`]: what a run produced

pub mod runner;

pub use runner::{AutoAcknowledge, MatchObserver, MatchRunner, MatchSummary, NoopObserver, RunnerConfig};
