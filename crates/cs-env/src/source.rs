//! The environment contract.
//!
//! # Threat accessor shapes
//!
//! Environments expose threat positions in one of two shapes: a
//! channel-indexed accessor (`channel_threats(channel)`) or a no-argument
//! accessor (`threats()`).  An environment declares which it implements via
//! [`Environment::threat_shapes`]; [`ThreatAccess::select`] picks one once,
//! at setup, preferring the channel shape.  Per-tick fetching then dispatches
//! on the chosen variant without probing again.

use cs_core::Position;
use log::debug;

use crate::parse_threats;

// ── ThreatShapes ──────────────────────────────────────────────────────────────

/// Which threat accessors an environment implements.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct ThreatShapes {
    pub channel: bool,
    pub plain:   bool,
}

impl ThreatShapes {
    pub const NONE:    ThreatShapes = ThreatShapes { channel: false, plain: false };
    pub const CHANNEL: ThreatShapes = ThreatShapes { channel: true, plain: false };
    pub const PLAIN:   ThreatShapes = ThreatShapes { channel: false, plain: true };
    pub const BOTH:    ThreatShapes = ThreatShapes { channel: true, plain: true };
}

// ── Environment ───────────────────────────────────────────────────────────────

/// Per-tick read access to a running game.
///
/// Every accessor may report "unavailable" with `None`.  Only
/// [`board`][Self::board] and [`agent_position`][Self::agent_position] are
/// required; the threat accessors default to unavailable.
pub trait Environment {
    /// Column-major tile tags: `board[x][y]`.
    fn board(&self) -> Option<&[Vec<i32>]>;

    /// Agent position as `"x,y"`.
    fn agent_position(&self) -> Option<String>;

    /// Which threat accessor shapes this environment implements.
    fn threat_shapes(&self) -> ThreatShapes {
        ThreatShapes::NONE
    }

    /// Channel-indexed threat accessor: `"x,y,type"` entries.
    fn channel_threats(&self, _channel: u32) -> Option<Vec<String>> {
        None
    }

    /// No-argument threat accessor: `"x,y,type"` entries.
    fn threats(&self) -> Option<Vec<String>> {
        None
    }
}

// ── ThreatAccess ──────────────────────────────────────────────────────────────

/// The threat accessor chosen for an environment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ThreatAccess {
    /// Call `channel_threats(channel)`.
    Channel(u32),
    /// Call `threats()`.
    Plain,
    /// Neither shape exists; every tick sees no threats.
    Unavailable,
}

impl ThreatAccess {
    /// Pick the accessor for `env`: channel-indexed first, then plain.
    pub fn select<E: Environment + ?Sized>(env: &E, channel: u32) -> Self {
        let shapes = env.threat_shapes();
        let access = if shapes.channel {
            ThreatAccess::Channel(channel)
        } else if shapes.plain {
            ThreatAccess::Plain
        } else {
            ThreatAccess::Unavailable
        };
        debug!("[Env] threat access: {access:?} (shapes {shapes:?})");
        access
    }

    /// This tick's threat positions.  An accessor returning `None` and an
    /// unavailable accessor both mean "no threats"; malformed entries are
    /// dropped.
    pub fn fetch<E: Environment + ?Sized>(&self, env: &E) -> Vec<Position> {
        let raw = match *self {
            ThreatAccess::Channel(ch) => env.channel_threats(ch),
            ThreatAccess::Plain       => env.threats(),
            ThreatAccess::Unavailable => None,
        };
        raw.map(parse_threats).unwrap_or_default()
    }
}
