//! `cs-tactics` — the per-tick decision engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`context`]  | `Snapshot<'a>` — read-only view of one tick's inputs         |
//! | [`memory`]   | `AgentMemory` — the only state carried between ticks         |
//! | [`threat`]   | `ThreatMap` — threat distances and the danger predicate      |
//! | [`forage`]   | `PathPlanner` — first step toward the nearest safe goal      |
//! | [`escape`]   | `EscapePlanner`, `random_safe_move`                          |
//! | [`decision`] | `DecisionLoop`, `Decision`, `Tier`                           |
//!
//! # Tick flow
//!
//! ```text
//! Snapshot ──► ThreatMap ──┬──► PathPlanner ───┐
//!                          └──► EscapePlanner ─┴──► DecisionLoop ──► Direction
//! ```
//!
//! [`DecisionLoop::decide`] is a pure function of `(snapshot, memory, rng)`:
//! the caller owns [`AgentMemory`] and the random source and threads both
//! through every call.  Nothing in this crate can fail; the worst outcome of
//! any missing or degenerate input is [`Direction::Stay`][cs_core::Direction::Stay].

pub mod context;
pub mod decision;
pub mod escape;
pub mod forage;
pub mod memory;
pub mod threat;


pub use context::Snapshot;
pub use decision::{Decision, DecisionLoop, Tier};
pub use escape::{EscapePlanner, random_safe_move};
pub use forage::PathPlanner;
pub use memory::AgentMemory;
pub use threat::ThreatMap;
