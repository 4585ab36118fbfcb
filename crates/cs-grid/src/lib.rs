//! `cs-grid` — tile grid and breadth-first search primitives.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`grid`]   | `Grid` — rectangular tile storage, wrapping, torus metric    |
//! | [`search`] | `flood_fill`, `shortest_path_first_step`, `shortest_path`, `all_distances` |
//! | [`field`]  | `DistanceField` — BFS depth per tile                         |
//! | [`error`]  | `GridError`, `GridResult<T>`                                 |
//!
//! Every search takes a passability predicate `Fn(Position, Tile) -> bool`
//! so callers decide what counts as an obstacle (walls, threat-adjacent
//! tiles, …).  The grid itself is never mutated by a search.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod field;
pub mod grid;
pub mod search;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use field::DistanceField;
pub use grid::Grid;
pub use search::{all_distances, flood_fill, shortest_path, shortest_path_first_step};
