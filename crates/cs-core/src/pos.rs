//! Grid coordinates and move directions.
//!
//! The board is indexed `(x, y)` with `x` selecting the column.  `Up`
//! increases `y`; `Right` increases `x`.  Coordinates are plain `i32` so a
//! step off the edge is representable before it is wrapped (toroidal grids)
//! or rejected (bounded grids).

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the five commands an agent can issue per tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    #[default]
    Stay,
}

impl Direction {
    /// The four moving directions in the fixed enumeration order used by
    /// every search and candidate scan.  Tie-breaking depends on this order.
    pub const MOVES: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(dx, dy)` step for this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down  => (0, -1),
            Direction::Left  => (-1, 0),
            Direction::Stay  => (0, 0),
        }
    }

    #[inline]
    pub fn is_move(self) -> bool {
        !matches!(self, Direction::Stay)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Right => "right",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Stay  => "stay",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Position ──────────────────────────────────────────────────────────────────

/// A tile coordinate.  Not necessarily canonical: see
/// [`Position::wrapped`] and the grid's `canonical` helper.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step in `dir`, without any wrapping.
    #[inline]
    pub fn step(self, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Reduce both axes into `[0, width) × [0, height)`.
    ///
    /// `width` and `height` must be positive.
    #[inline]
    pub fn wrapped(self, width: i32, height: i32) -> Position {
        Position::new(self.x.rem_euclid(width), self.y.rem_euclid(height))
    }

    /// Wrapped Manhattan distance on a `width × height` torus: per axis the
    /// shorter of the direct and the wrap-around gap, summed.
    pub fn torus_distance(self, other: Position, width: i32, height: i32) -> u32 {
        let a = self.wrapped(width, height);
        let b = other.wrapped(width, height);
        let dx = (a.x - b.x).unsigned_abs();
        let dy = (a.y - b.y).unsigned_abs();
        dx.min(width as u32 - dx) + dy.min(height as u32 - dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses the environment's `"x,y"` form.  Any fields after the second (for
/// example the type tag in `"x,y,type"`) are ignored.
impl FromStr for Position {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(',').map(str::trim);
        let mut next = |axis: &str| -> Result<i32, CoreError> {
            let raw = fields
                .next()
                .filter(|f| !f.is_empty())
                .ok_or_else(|| CoreError::Parse(format!("missing {axis} in {s:?}")))?;
            raw.parse::<i32>()
                .map_err(|e| CoreError::Parse(format!("bad {axis} {raw:?} in {s:?}: {e}")))
        };
        let x = next("x")?;
        let y = next("y")?;
        Ok(Position::new(x, y))
    }
}
