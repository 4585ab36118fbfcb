//! Escape scoring and the random fallback move.

use cs_core::{Direction, EscapeWeights, Position, TacticsConfig, Tile};
use cs_grid::flood_fill;
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::ThreatMap;

// ── EscapePlanner ─────────────────────────────────────────────────────────────

/// Scores each immediate move by threat clearance and open space.
///
/// Candidates are scanned in [`Direction::MOVES`] order.  A candidate is
/// rejected outright if it is a wall (or off a bounded grid) or lies within
/// distance 1 of a threat.  Survivors are scored with [`EscapeWeights`]; the
/// first highest score wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscapePlanner {
    weights:   EscapeWeights,
    flood_cap: usize,
}

impl EscapePlanner {
    pub fn new(weights: EscapeWeights, flood_cap: usize) -> Self {
        Self { weights, flood_cap }
    }

    pub fn from_config(config: &TacticsConfig) -> Self {
        Self::new(config.escape.clone(), config.flood_cap)
    }

    /// Score for stepping onto `dest`, or `None` if the step is rejected.
    pub fn score(&self, threats: &ThreatMap<'_>, dest: Position) -> Option<i64> {
        let grid = threats.grid();
        let tile = grid.tile_at(dest).filter(|t| !t.is_wall())?;

        let clearance = threats.min_distance(dest);
        if clearance <= ThreatMap::DANGER_RADIUS {
            return None;
        }

        let w = &self.weights;
        let area = flood_fill(grid, dest, |_, t| !t.is_wall(), self.flood_cap);
        let goal_term = if tile == Tile::Goal { w.goal_bonus } else { 0 };

        // Saturating: with no threats the clearance is `NO_THREAT`.
        let clearance_term = w.distance_weight.saturating_mul(i64::from(clearance));
        Some(
            clearance_term
                .saturating_add(self.open_area_term(area))
                .saturating_add(goal_term),
        )
    }

    fn open_area_term(&self, area: usize) -> i64 {
        let w = &self.weights;
        if area < w.cramped_area {
            -w.cramped_penalty
        } else if area < w.tight_area {
            -w.tight_penalty
        } else {
            w.open_area_weight.saturating_mul(area as i64)
        }
    }

    /// Best-scoring move, or `None` if every candidate was rejected.
    pub fn best_move(&self, threats: &ThreatMap<'_>, agent: Position) -> Option<Direction> {
        let mut best: Option<(Direction, i64)> = None;
        for (dir, dest) in threats.grid().neighbors4(agent) {
            let Some(score) = self.score(threats, dest) else {
                continue;
            };
            trace!("[Escape] {dir} -> {dest}: score {score}");
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((dir, score));
            }
        }
        best.map(|(dir, _)| dir)
    }

    /// [`best_move`][Self::best_move], falling back to [`random_safe_move`].
    pub fn choose<R: Rng + ?Sized>(
        &self,
        threats: &ThreatMap<'_>,
        agent:   Position,
        rng:     &mut R,
    ) -> Direction {
        match self.best_move(threats, agent) {
            Some(dir) => dir,
            None => {
                debug!("[Escape] every move from {agent} rejected; picking at random");
                random_safe_move(threats, agent, rng)
            }
        }
    }
}

// ── RandomSafeMove ────────────────────────────────────────────────────────────

/// A uniformly random legal move, preferring moves that do not end on a
/// danger tile.  `Stay` only when every neighbor is a wall.
pub fn random_safe_move<R: Rng + ?Sized>(
    threats: &ThreatMap<'_>,
    agent:   Position,
    rng:     &mut R,
) -> Direction {
    let mut legal = Vec::with_capacity(4);
    let mut safe = Vec::with_capacity(4);
    for (dir, dest) in threats.grid().neighbors4(agent) {
        let Some(tile) = threats.grid().tile_at(dest) else {
            continue;
        };
        if tile.is_wall() {
            continue;
        }
        legal.push(dir);
        if !threats.is_danger(dest) {
            safe.push(dir);
        }
    }

    let pool = if safe.is_empty() { &legal } else { &safe };
    pool.choose(rng).copied().unwrap_or(Direction::Stay)
}
