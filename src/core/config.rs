//! Match configuration.
//!
//! All values are consumed when a match is built and stay fixed for its
//! lifetime, including across `reset_game`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Static configuration for a match.
///
/// ## Example
///
/// ```
/// use scale_duel::core::MatchConfig;
///
/// let config = MatchConfig::default()
///     .with_slot_count(5)
///     .with_end_threshold(15);
///
/// assert_eq!(config.slot_count, 5);
/// assert_eq!(config.max_hand, 6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Board slots per side. Combat pairs slot `i` with slot `i`.
    pub slot_count: usize,

    /// Maximum cards a hand may hold.
    pub max_hand: usize,

    /// Absolute scale value that ends the match.
    pub end_threshold: i32,

    /// Resource pool size (current and max) at turn 1.
    pub initial_resource: i32,

    /// Upper bound for the resource pool's max.
    pub resource_cap: i32,

    /// Cards drawn into each hand when the match starts.
    pub initial_hand: usize,

    /// Cards drawn when a side's action window opens.
    pub draws_per_turn: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            slot_count: 4,
            max_hand: 6,
            end_threshold: 10,
            initial_resource: 1,
            resource_cap: 10,
            initial_hand: 4,
            draws_per_turn: 1,
        }
    }
}

impl MatchConfig {
    /// Set the number of board slots per side.
    #[must_use]
    pub fn with_slot_count(mut self, slots: usize) -> Self {
        self.slot_count = slots;
        self
    }

    /// Set the hand capacity.
    #[must_use]
    pub fn with_max_hand(mut self, max_hand: usize) -> Self {
        self.max_hand = max_hand;
        self
    }

    /// Set the end threshold.
    #[must_use]
    pub fn with_end_threshold(mut self, threshold: i32) -> Self {
        self.end_threshold = threshold;
        self
    }

    /// Set the starting resource.
    #[must_use]
    pub fn with_initial_resource(mut self, resource: i32) -> Self {
        self.initial_resource = resource;
        self
    }

    /// Set the resource cap.
    #[must_use]
    pub fn with_resource_cap(mut self, cap: i32) -> Self {
        self.resource_cap = cap;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_initial_hand(mut self, cards: usize) -> Self {
        self.initial_hand = cards;
        self
    }

    /// Set the per-turn draw count.
    #[must_use]
    pub fn with_draws_per_turn(mut self, cards: usize) -> Self {
        self.draws_per_turn = cards;
        self
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_count == 0 {
            return Err(ConfigError::NoSlots);
        }
        if self.max_hand == 0 {
            return Err(ConfigError::NoHandCapacity);
        }
        if self.end_threshold <= 0 {
            return Err(ConfigError::NonPositiveThreshold(self.end_threshold));
        }
        if self.initial_resource < 0 || self.initial_resource > self.resource_cap {
            return Err(ConfigError::ResourceOutOfRange {
                initial: self.initial_resource,
                cap: self.resource_cap,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.slot_count, 4);
        assert_eq!(config.max_hand, 6);
        assert_eq!(config.end_threshold, 10);
        assert_eq!(config.initial_resource, 1);
        assert_eq!(config.resource_cap, 10);
        assert_eq!(config.initial_hand, 4);
        assert_eq!(config.draws_per_turn, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::default()
            .with_slot_count(3)
            .with_max_hand(8)
            .with_end_threshold(20)
            .with_initial_resource(2)
            .with_resource_cap(7)
            .with_initial_hand(5)
            .with_draws_per_turn(2);

        assert_eq!(config.slot_count, 3);
        assert_eq!(config.max_hand, 8);
        assert_eq!(config.end_threshold, 20);
        assert_eq!(config.initial_resource, 2);
        assert_eq!(config.resource_cap, 7);
        assert_eq!(config.initial_hand, 5);
        assert_eq!(config.draws_per_turn, 2);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            MatchConfig::default().with_slot_count(0).validate(),
            Err(ConfigError::NoSlots)
        );
        assert_eq!(
            MatchConfig::default().with_max_hand(0).validate(),
            Err(ConfigError::NoHandCapacity)
        );
        assert_eq!(
            MatchConfig::default().with_end_threshold(0).validate(),
            Err(ConfigError::NonPositiveThreshold(0))
        );
        assert_eq!(
            MatchConfig::default().with_initial_resource(11).validate(),
            Err(ConfigError::ResourceOutOfRange { initial: 11, cap: 10 })
        );
    }

    #[test]
    fn test_serde_partial_config() {
        let config: MatchConfig = serde_json::from_str(r#"{"slot_count": 6}"#).unwrap();
        assert_eq!(config.slot_count, 6);
        assert_eq!(config.end_threshold, 10);

        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
