//! Policy integration for learned controllers.
//!
//! - **Encoding**: `StateEncoder` trait and the `ObservationEncoder` layout
//! - **Policies**: `DecisionPolicy` trait, `FixedPolicy` baseline
//!
//! ```
//! use scale_duel::core::MatchConfig;
//! use scale_duel::nn::{ObservationEncoder, StateEncoder};
//!
//! let encoder = ObservationEncoder::for_config(&MatchConfig::default());
//! assert_eq!(encoder.output_shape(), vec![encoder.feature_count()]);
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{ObservationEncoder, StateEncoder};
pub use traits::{DecisionPolicy, EncodedState, FixedPolicy};
