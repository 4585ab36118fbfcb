//! Tactical tuning parameters.
//!
//! # Reference tuning
//!
//! The defaults reproduce the reference behaviour:
//!
//! | Parameter          | Default   | Used by                        |
//! |--------------------|-----------|--------------------------------|
//! | `panic_distance`   | 4         | threat triage                  |
//! | `min_safe_area`    | 80        | foraging acceptance filter     |
//! | `flood_cap`        | 100       | every open-space flood fill    |
//! | `stuck_threshold`  | 5         | deadlock recovery              |
//! | `escape`           | see below | escape candidate scoring       |
//!
//! Typically loaded from a TOML/JSON file by the application (with the
//! `serde` feature) and validated once before the first tick.

use crate::{CoreError, CoreResult};

// ── EscapeWeights ─────────────────────────────────────────────────────────────

/// Scoring constants for escape candidates.
///
/// ```text
/// score = distance_weight × threat_distance + open_area_term + goal_term
///
/// open_area_term = -cramped_penalty          if area < cramped_area
///                = -tight_penalty            if area < tight_area
///                = open_area_weight × area   otherwise
/// goal_term      = goal_bonus if the destination holds a goal tile
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EscapeWeights {
    pub distance_weight:  i64,
    pub cramped_area:     usize,
    pub cramped_penalty:  i64,
    pub tight_area:       usize,
    pub tight_penalty:    i64,
    pub open_area_weight: i64,
    pub goal_bonus:       i64,
}

impl Default for EscapeWeights {
    fn default() -> Self {
        Self {
            distance_weight:  10,
            cramped_area:     20,
            cramped_penalty:  100_000,
            tight_area:       50,
            tight_penalty:    5_000,
            open_area_weight: 5,
            goal_bonus:       5,
        }
    }
}

// ── TacticsConfig ─────────────────────────────────────────────────────────────

/// Top-level tuning for one decision loop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TacticsConfig {
    /// Threat distance at or below which the agent stops foraging and evades.
    pub panic_distance: u32,

    /// Minimum flood-fill count around the first step toward a goal.
    pub min_safe_area: usize,

    /// Hard cap on tiles dequeued by any open-space flood fill.
    pub flood_cap: usize,

    /// Consecutive stationary ticks that trigger a forced random move.
    pub stuck_threshold: u32,

    pub escape: EscapeWeights,
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self {
            panic_distance:  4,
            min_safe_area:   80,
            flood_cap:       100,
            stuck_threshold: 5,
            escape:          EscapeWeights::default(),
        }
    }
}

impl TacticsConfig {
    /// Reject combinations that would silently disable a tier.
    pub fn validate(&self) -> CoreResult<()> {
        if self.flood_cap == 0 {
            return Err(CoreError::Config("flood_cap must be positive".into()));
        }
        if self.min_safe_area > self.flood_cap {
            return Err(CoreError::Config(format!(
                "min_safe_area {} exceeds flood_cap {}; no goal could ever be accepted",
                self.min_safe_area, self.flood_cap
            )));
        }
        if self.stuck_threshold == 0 {
            return Err(CoreError::Config("stuck_threshold must be positive".into()));
        }
        let w = &self.escape;
        if w.cramped_area > w.tight_area {
            return Err(CoreError::Config(format!(
                "escape.cramped_area {} exceeds escape.tight_area {}",
                w.cramped_area, w.tight_area
            )));
        }
        if w.cramped_penalty < 0 || w.tight_penalty < 0 {
            return Err(CoreError::Config("escape penalties must be non-negative".into()));
        }
        Ok(())
    }
}
