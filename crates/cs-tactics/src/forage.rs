//! Foraging: first step toward the nearest goal with room to breathe.

use cs_core::{Direction, Position, TacticsConfig, Tile};
use cs_grid::{flood_fill, shortest_path_first_step};
use log::{debug, trace};

use crate::ThreatMap;

/// Finds the first move of a shortest safe route to the nearest goal tile.
///
/// The route avoids walls and danger tiles.  Before the step is accepted the
/// planner flood-fills from the tile it lands on (same predicate, capped at
/// `flood_cap`) and requires at least `min_safe_area` tiles.
///
/// Only the nearest goal is considered.  If it fails the open-area check the
/// planner returns `None` rather than searching for the next-nearest goal;
/// the decision loop then falls back to escaping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPlanner {
    min_safe_area: usize,
    flood_cap:     usize,
}

impl PathPlanner {
    pub fn new(min_safe_area: usize, flood_cap: usize) -> Self {
        Self { min_safe_area, flood_cap }
    }

    pub fn from_config(config: &TacticsConfig) -> Self {
        Self::new(config.min_safe_area, config.flood_cap)
    }

    /// Direction toward the nearest acceptable goal, or `None`.
    pub fn plan(&self, threats: &ThreatMap<'_>, agent: Position) -> Option<Direction> {
        let grid = threats.grid();
        let passable = |p: Position, t: Tile| threats.passable(p, t);

        let dir = shortest_path_first_step(grid, agent, |_, t| t.is_goal(), passable)?;

        let area = flood_fill(grid, agent.step(dir), passable, self.flood_cap);
        if area < self.min_safe_area {
            debug!(
                "[Forage] goal via {dir} rejected: open area {area} < {}",
                self.min_safe_area
            );
            return None;
        }
        trace!("[Forage] {agent} -> {dir} (open area {area})");
        Some(dir)
    }
}
