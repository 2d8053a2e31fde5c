//! Controllers: the sources of actions for each side.
//!
//! - [`HumanController`]: actions from an input channel
//! - [`HeuristicController`]: seeded scripted opponent
//! - [`FirstFitController`]: first affordable card, first free slot
//! - [`LearnedPolicyController`]: encoded observation in, policy tuple out
//!
//! All of them see only an [`Observation`] and propose one [`Action`] at a
//! time; legality is decided by the match.
//!
//! [`Action`]: crate::core::Action

pub mod first_fit;
pub mod heuristic;
pub mod human;
pub mod learned;
pub mod observation;
pub mod traits;

pub use first_fit::FirstFitController;
pub use heuristic::{card_score, HeuristicConfig, HeuristicController};
pub use human::HumanController;
pub use learned::LearnedPolicyController;
pub use observation::{CardView, Observation};
pub use traits::Controller;
