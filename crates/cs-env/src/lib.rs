//! `cs-env` — adapter between a game environment and the decision loop.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`source`]  | `Environment` trait, `ThreatShapes`, `ThreatAccess`          |
//! | [`parse`]   | `"x,y"` / `"x,y,type"` coordinate parsing                    |
//! | [`pilot`]   | `Pilot` — one agent: memory, RNG, and the per-tick call      |
//! | [`builder`] | `PilotBuilder` — fluent, validating construction             |
//! | [`error`]   | `EnvError`, `EnvResult<T>`                                   |
//!
//! # Fail-soft contract
//!
//! [`Pilot::tick`] never returns an error.  A missing or ragged board, or a
//! missing or malformed position, is logged and turned into `Stay`;
//! malformed threat entries are dropped one by one; an environment with no
//! threat accessor at all is treated as having no threats.  Errors surface
//! only from construction ([`PilotBuilder::build`]) and from the explicit
//! `read_*` helpers.

pub mod builder;
pub mod error;
pub mod parse;
pub mod pilot;
pub mod source;


pub use builder::PilotBuilder;
pub use error::{EnvError, EnvResult};
pub use parse::{parse_position, parse_threats};
pub use pilot::Pilot;
pub use source::{Environment, ThreatAccess, ThreatShapes};
