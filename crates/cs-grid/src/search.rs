//! Breadth-first search primitives over a [`Grid`].
//!
//! All searches share the same shape: a FIFO queue of flat tile indices, a
//! `visited` (or depth) vector sized to the board, and neighbor expansion in
//! [`Direction::MOVES`] order.  That fixed order is what makes tie-breaking
//! between equal-length paths deterministic.
//!
//! The start tile is always seeded, whatever the predicate says about it.
//! Every other tile must satisfy `passable` to be entered.
//!
//! # Cost
//!
//! Each search visits a tile at most once and allocates O(width × height)
//! auxiliary state.  [`flood_fill`] is additionally capped by `limit`.

use std::collections::VecDeque;

use cs_core::{Direction, Position, Tile};
use log::trace;

use crate::{DistanceField, Grid};

/// Sentinel parent index for the start tile and unvisited tiles.
const NO_PARENT: usize = usize::MAX;

// ── Flood fill ────────────────────────────────────────────────────────────────

/// Count tiles reachable from `start` through `passable` tiles, stopping once
/// `limit` tiles have been dequeued.
///
/// The result is a lower bound on the true component size (exact when it is
/// below `limit`).  Returns 0 for an off-grid start on a bounded grid.
pub fn flood_fill<P>(grid: &Grid, start: Position, passable: P, limit: usize) -> usize
where
    P: Fn(Position, Tile) -> bool,
{
    let Some(start_idx) = grid.index_of(start) else {
        return 0;
    };

    let mut visited = vec![false; grid.area()];
    let mut queue = VecDeque::new();
    visited[start_idx] = true;
    queue.push_back(start_idx);

    let mut count = 0;
    while count < limit {
        let Some(idx) = queue.pop_front() else {
            break;
        };
        count += 1;

        for (_, next) in grid.neighbors4(grid.position_of(idx)) {
            let n = grid.canonical_index(next);
            if !visited[n] && passable(next, grid.tile_at_index(n)) {
                visited[n] = true;
                queue.push_back(n);
            }
        }
    }
    count
}

// ── Shortest path ─────────────────────────────────────────────────────────────

/// First move along a shortest route from `start` to the nearest tile
/// satisfying `is_goal`.
///
/// The start tile itself never counts as a goal.  Returns `None` if the
/// frontier empties without dequeuing a goal.
pub fn shortest_path_first_step<G, P>(
    grid:     &Grid,
    start:    Position,
    is_goal:  G,
    passable: P,
) -> Option<Direction>
where
    G: Fn(Position, Tile) -> bool,
    P: Fn(Position, Tile) -> bool,
{
    let start_idx = grid.index_of(start)?;

    let mut visited = vec![false; grid.area()];
    // first_move[v] = direction taken out of `start` on the way to v.
    let mut first_move: Vec<Option<Direction>> = vec![None; grid.area()];
    let mut queue = VecDeque::new();
    visited[start_idx] = true;
    queue.push_back(start_idx);

    let mut expanded = 0usize;
    while let Some(idx) = queue.pop_front() {
        expanded += 1;
        let here = grid.position_of(idx);

        if idx != start_idx && is_goal(here, grid.tile_at_index(idx)) {
            trace!("[BFS] goal {here} reached after {expanded} tiles via {:?}", first_move[idx]);
            return first_move[idx];
        }

        for (dir, next) in grid.neighbors4(here) {
            let n = grid.canonical_index(next);
            if visited[n] || !passable(next, grid.tile_at_index(n)) {
                continue;
            }
            visited[n] = true;
            first_move[n] = if idx == start_idx { Some(dir) } else { first_move[idx] };
            queue.push_back(n);
        }
    }

    trace!("[BFS] no goal reachable from {start} after {expanded} tiles");
    None
}

/// The full shortest route from `start` to `goal`, both endpoints included
/// and every position canonical.  `Some(vec![start])` when they coincide.
pub fn shortest_path<P>(
    grid:     &Grid,
    start:    Position,
    goal:     Position,
    passable: P,
) -> Option<Vec<Position>>
where
    P: Fn(Position, Tile) -> bool,
{
    let start_idx = grid.index_of(start)?;
    let goal_idx = grid.index_of(goal)?;

    let mut visited = vec![false; grid.area()];
    // parent[v] = tile index that reached v; NO_PARENT for start/unvisited.
    let mut parent = vec![NO_PARENT; grid.area()];
    let mut queue = VecDeque::new();
    visited[start_idx] = true;
    queue.push_back(start_idx);

    while let Some(idx) = queue.pop_front() {
        if idx == goal_idx {
            return Some(reconstruct(grid, &parent, goal_idx));
        }
        for (_, next) in grid.neighbors4(grid.position_of(idx)) {
            let n = grid.canonical_index(next);
            if !visited[n] && passable(next, grid.tile_at_index(n)) {
                visited[n] = true;
                parent[n] = idx;
                queue.push_back(n);
            }
        }
    }

    trace!("[BFS] no route from {start} to {goal}");
    None
}

fn reconstruct(grid: &Grid, parent: &[usize], goal_idx: usize) -> Vec<Position> {
    let mut path = Vec::new();
    let mut cur = goal_idx;
    loop {
        path.push(grid.position_of(cur));
        let p = parent[cur];
        if p == NO_PARENT {
            break;
        }
        cur = p;
    }
    path.reverse();
    path
}

// ── Distance field ────────────────────────────────────────────────────────────

/// BFS depth from `start` to every reachable tile.
///
/// The start tile has depth 0.  An off-grid start on a bounded grid yields a
/// field with nothing reached.
pub fn all_distances<P>(grid: &Grid, start: Position, passable: P) -> DistanceField
where
    P: Fn(Position, Tile) -> bool,
{
    let mut field = DistanceField::unreached(grid);
    let Some(start_idx) = grid.index_of(start) else {
        return field;
    };

    let mut queue = VecDeque::new();
    field.set_raw(start_idx, 0);
    queue.push_back(start_idx);

    while let Some(idx) = queue.pop_front() {
        let depth = field.raw(idx);
        for (_, next) in grid.neighbors4(grid.position_of(idx)) {
            let n = grid.canonical_index(next);
            if field.raw(n) == DistanceField::UNREACHED && passable(next, grid.tile_at_index(n)) {
                field.set_raw(n, depth + 1);
                queue.push_back(n);
            }
        }
    }
    field
}
