//! `cs-core` — foundational types for the `cyclic_survivor` agent.
//!
//! This crate is a dependency of every other `cs-*` crate.  It has no `cs-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`ids`]    | `AgentId`                                                |
//! | [`pos`]    | `Position`, `Direction`                                  |
//! | [`tile`]   | `Tile` — integer board tags                              |
//! | [`config`] | `TacticsConfig`, `EscapeWeights` (reference tuning)      |
//! | [`rng`]    | `AgentRng` (per-agent, seedable)                         |
//! | [`error`]  | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod tile;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EscapeWeights, TacticsConfig};
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use pos::{Direction, Position};
pub use rng::AgentRng;
pub use tile::Tile;
