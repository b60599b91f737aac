//! Room configuration.
//!
//! Rooms are configured at construction by providing:
//! - `RoundDraw`: how many templates a round uses and how the draw is biased
//! - `RoomConfig`: the draw policy plus the computer opponent's display name
//!
//! The defaults reproduce the standard game: six templates per round, at
//! least four of them of size 4 or less.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shapes::template::{MAX_SHAPE_SIZE, MIN_SHAPE_SIZE};

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a round needs at least one template")]
    EmptyRound,
    #[error("small-template quota {quota} exceeds round size {count}")]
    QuotaExceedsCount { quota: usize, count: usize },
    #[error("small-template size limit {0} is outside 3..=6")]
    SmallSizeOutOfRange(usize),
}

/// Template selection policy for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDraw {
    /// Templates active per round.
    pub count: usize,

    /// How many templates to draw from the small pool before the rest.
    pub small_quota: usize,

    /// Largest size that still counts as small.
    pub small_max_size: usize,
}

impl Default for RoundDraw {
    fn default() -> Self {
        Self {
            count: 6,
            small_quota: 4,
            small_max_size: 4,
        }
    }
}

impl RoundDraw {
    /// Check the policy for internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyRound);
        }
        if self.small_quota > self.count {
            return Err(ConfigError::QuotaExceedsCount {
                quota: self.small_quota,
                count: self.count,
            });
        }
        if !(MIN_SHAPE_SIZE..=MAX_SHAPE_SIZE).contains(&self.small_max_size) {
            return Err(ConfigError::SmallSizeOutOfRange(self.small_max_size));
        }
        Ok(())
    }
}

/// Configuration for a single room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Template draw policy, applied at creation and on every rematch.
    pub draw: RoundDraw,

    /// Display name given to the computer opponent in CPU rooms.
    pub cpu_name: String,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            draw: RoundDraw::default(),
            cpu_name: "CPU (Easy)".to_string(),
        }
    }
}

impl RoomConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of templates per round.
    #[must_use]
    pub fn with_template_count(mut self, count: usize) -> Self {
        self.draw.count = count;
        self
    }

    /// Set the small-template quota.
    #[must_use]
    pub fn with_small_quota(mut self, quota: usize) -> Self {
        self.draw.small_quota = quota;
        self
    }

    /// Set the largest size counted as small.
    #[must_use]
    pub fn with_small_max_size(mut self, size: usize) -> Self {
        self.draw.small_max_size = size;
        self
    }

    /// Set the computer opponent's display name.
    #[must_use]
    pub fn with_cpu_name(mut self, name: impl Into<String>) -> Self {
        self.cpu_name = name.into();
        self
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.draw.validate()
    }
}
