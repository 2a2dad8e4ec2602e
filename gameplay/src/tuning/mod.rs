//! Play tuning: health and score constants the host applies after events.
//!
//! Tuning is loaded from TOML. Every field is optional and falls back to the
//! defaults below:
//!
//! ```toml
//! max_health = 2.0
//! ghost_tapping = false
//! ghost_miss_health_penalty = 0.04
//! ghost_miss_score_penalty = 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading tuning.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Health and score constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayTuning {
    /// Health bar capacity.
    pub max_health: f64,

    /// Pressing an empty lane costs nothing. The ghost miss penalties below
    /// only apply while this is off.
    pub ghost_tapping: bool,

    /// Health lost on a ghost miss, as a positive magnitude.
    pub ghost_miss_health_penalty: f64,

    /// Score lost on a ghost miss, as a positive magnitude.
    pub ghost_miss_score_penalty: i32,
}

impl Default for PlayTuning {
    fn default() -> Self {
        Self {
            max_health: 2.0,
            ghost_tapping: false,
            ghost_miss_health_penalty: 0.04,
            ghost_miss_score_penalty: 10,
        }
    }
}

impl PlayTuning {
    /// Parse tuning from a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, TuningError> {
        let tuning: PlayTuning = toml::from_str(text)?;
        tuning.validate()?;
        debug!(target: "gameplay", ?tuning, "parsed play tuning");
        Ok(tuning)
    }

    /// Load tuning from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let tuning = Self::from_toml_str(&text)?;
        info!(target: "gameplay", path = %path.display(), "loaded play tuning");
        Ok(tuning)
    }

    /// Reject values the host cannot apply.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !self.max_health.is_finite() || self.max_health <= 0.0 {
            return Err(TuningError::Invalid {
                field: "max_health",
                reason: format!("must be positive, got {}", self.max_health),
            });
        }
        if !self.ghost_miss_health_penalty.is_finite() || self.ghost_miss_health_penalty < 0.0 {
            return Err(TuningError::Invalid {
                field: "ghost_miss_health_penalty",
                reason: format!("must be non-negative, got {}", self.ghost_miss_health_penalty),
            });
        }
        if self.ghost_miss_score_penalty < 0 {
            return Err(TuningError::Invalid {
                field: "ghost_miss_score_penalty",
                reason: format!("must be non-negative, got {}", self.ghost_miss_score_penalty),
            });
        }
        Ok(())
    }

    /// Signed health change for a ghost miss. Zero with ghost tapping on.
    pub fn ghost_miss_health_change(&self) -> f64 {
        if self.ghost_tapping {
            0.0
        } else {
            -self.ghost_miss_health_penalty
        }
    }

    /// Signed score change for a ghost miss. Zero with ghost tapping on.
    ///
    /// Saturates instead of overflowing, since the fields are public and may
    /// not have been validated.
    pub fn ghost_miss_score_change(&self) -> i32 {
        if self.ghost_tapping {
            0
        } else {
            self.ghost_miss_score_penalty.saturating_neg()
        }
    }
}
