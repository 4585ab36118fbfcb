//! Per-tick threat distances and the danger predicate.
//!
//! A *danger* tile is any tile within toroidal distance 1 of a threat
//! (the threat's own tile and its four neighbors).  Planning searches treat
//! danger tiles as virtual walls, so a planned route never steps next to a
//! threat as positioned this tick.

use cs_core::{Position, Tile};
use cs_grid::Grid;

/// Threat positions for one tick, bound to the grid they live on.
#[derive(Clone, Debug)]
pub struct ThreatMap<'g> {
    grid:    &'g Grid,
    threats: Vec<Position>,
}

impl<'g> ThreatMap<'g> {
    /// Returned by [`min_distance`][Self::min_distance] when there are no threats.
    pub const NO_THREAT: u32 = u32::MAX;

    /// Tiles this close to a threat (inclusive) are dangerous.
    pub const DANGER_RADIUS: u32 = 1;

    /// Build from raw threat positions; each is wrapped onto the grid.
    pub fn new(grid: &'g Grid, threats: &[Position]) -> Self {
        let threats = threats
            .iter()
            .map(|t| t.wrapped(grid.width(), grid.height()))
            .collect();
        Self { grid, threats }
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn threats(&self) -> &[Position] {
        &self.threats
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.threats.is_empty()
    }

    /// Distance from `pos` to the nearest threat, or [`NO_THREAT`][Self::NO_THREAT].
    pub fn min_distance(&self, pos: Position) -> u32 {
        self.threats
            .iter()
            .map(|&t| self.grid.toroidal_distance(pos, t))
            .min()
            .unwrap_or(Self::NO_THREAT)
    }

    /// `true` if any threat is within [`DANGER_RADIUS`][Self::DANGER_RADIUS].
    #[inline]
    pub fn is_danger(&self, pos: Position) -> bool {
        self.threats
            .iter()
            .any(|&t| self.grid.toroidal_distance(pos, t) <= Self::DANGER_RADIUS)
    }

    /// The planning predicate: not a wall and not a danger tile.
    #[inline]
    pub fn passable(&self, pos: Position, tile: Tile) -> bool {
        !tile.is_wall() && !self.is_danger(pos)
    }
}
