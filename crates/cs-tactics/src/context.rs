//! Read-only per-tick input passed to the decision loop.

use cs_core::Position;
use cs_grid::Grid;

/// Everything the environment reported for one tick.
///
/// Built by the caller right before [`DecisionLoop::decide`][crate::DecisionLoop::decide]
/// and only borrowed for that call; the grid must not be mutated while the
/// snapshot is live.
///
/// `grid` and `agent` are optional because the environment may fail to
/// report them on a given tick.  Either being absent makes the decision
/// [`Tier::MissingInput`][crate::Tier::MissingInput].
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub grid: Option<&'a Grid>,

    /// Agent position as reported; wrapped onto the grid before use.
    pub agent: Option<Position>,

    /// Known threat positions.  Empty means "no threats known".
    pub threats: &'a [Position],
}

impl<'a> Snapshot<'a> {
    /// A fully populated snapshot.
    #[inline]
    pub fn new(grid: &'a Grid, agent: Position, threats: &'a [Position]) -> Self {
        Self { grid: Some(grid), agent: Some(agent), threats }
    }

    /// A snapshot for a tick on which the environment reported nothing.
    #[inline]
    pub fn empty() -> Self {
        Self { grid: None, agent: None, threats: &[] }
    }
}
