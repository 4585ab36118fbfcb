//! The per-tick decision loop.
//!
//! # Tiers
//!
//! Each call walks the tiers top to bottom and returns at the first that
//! produces a move:
//!
//! | Tier            | Condition                                        | Move source        |
//! |-----------------|--------------------------------------------------|--------------------|
//! | `MissingInput`  | no grid, no position, or position off the grid   | `Stay`             |
//! | `StuckRecovery` | stationary for `stuck_threshold` ticks           | `random_safe_move` |
//! | `Evade`         | nearest threat ≤ `panic_distance`                | `EscapePlanner`    |
//! | `Forage`        | a safe goal route exists                         | `PathPlanner`      |
//! | `Fallback`      | otherwise                                        | `EscapePlanner`    |
//!
//! Only `AgentMemory` survives between calls.  A `MissingInput` tick leaves
//! it untouched; a `StuckRecovery` tick zeroes its counter.

use std::fmt;

use cs_core::{CoreResult, Direction, TacticsConfig};
use log::{debug, trace, warn};
use rand::Rng;

use crate::{AgentMemory, EscapePlanner, PathPlanner, Snapshot, ThreatMap, random_safe_move};

// ── Decision ──────────────────────────────────────────────────────────────────

/// Which tier of the loop produced a move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Tier {
    MissingInput,
    StuckRecovery,
    Evade,
    Forage,
    Fallback,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::MissingInput  => "missing-input",
            Tier::StuckRecovery => "stuck-recovery",
            Tier::Evade         => "evade",
            Tier::Forage        => "forage",
            Tier::Fallback      => "fallback",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tick's output: the move, and the tier that chose it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Decision {
    pub direction: Direction,
    pub tier:      Tier,
}

impl Decision {
    #[inline]
    fn new(direction: Direction, tier: Tier) -> Self {
        Self { direction, tier }
    }
}

// ── DecisionLoop ──────────────────────────────────────────────────────────────

/// Orchestrates stuck detection, threat triage, foraging, and escape.
///
/// Holds only immutable tuning, so one instance can serve any number of
/// agents as long as each brings its own [`AgentMemory`] and RNG.
#[derive(Clone, Debug)]
pub struct DecisionLoop {
    config: TacticsConfig,
    forage: PathPlanner,
    escape: EscapePlanner,
}

impl Default for DecisionLoop {
    fn default() -> Self {
        Self::from_valid(TacticsConfig::default())
    }
}

impl DecisionLoop {
    /// Validate `config` and build the planners from it.
    pub fn new(config: TacticsConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: TacticsConfig) -> Self {
        Self {
            forage: PathPlanner::from_config(&config),
            escape: EscapePlanner::from_config(&config),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &TacticsConfig {
        &self.config
    }

    /// Choose this tick's move.
    ///
    /// Never fails: degenerate input degrades to [`Direction::Stay`].
    pub fn decide<R: Rng + ?Sized>(
        &self,
        snapshot: &Snapshot<'_>,
        memory:   &mut AgentMemory,
        rng:      &mut R,
    ) -> Decision {
        let (Some(grid), Some(reported)) = (snapshot.grid, snapshot.agent) else {
            debug!("[Decide] board or position missing; staying");
            return Decision::new(Direction::Stay, Tier::MissingInput);
        };
        let Some(agent) = grid.canonical(reported) else {
            warn!(
                "[Decide] position {reported} is off the {}x{} board; staying",
                grid.width(),
                grid.height()
            );
            return Decision::new(Direction::Stay, Tier::MissingInput);
        };

        let threats = ThreatMap::new(grid, snapshot.threats);

        if memory.observe(agent) >= self.config.stuck_threshold {
            memory.clear_stationary();
            let dir = random_safe_move(&threats, agent, rng);
            debug!("[Decide] stuck at {agent}; forcing {dir}");
            return Decision::new(dir, Tier::StuckRecovery);
        }

        let nearest = threats.min_distance(agent);
        let decision = if nearest <= self.config.panic_distance {
            Decision::new(self.escape.choose(&threats, agent, rng), Tier::Evade)
        } else if let Some(dir) = self.forage.plan(&threats, agent) {
            Decision::new(dir, Tier::Forage)
        } else {
            Decision::new(self.escape.choose(&threats, agent, rng), Tier::Fallback)
        };

        trace!(
            "[Decide] {agent} nearest threat {nearest} -> {} ({})",
            decision.direction,
            decision.tier
        );
        decision
    }
}
