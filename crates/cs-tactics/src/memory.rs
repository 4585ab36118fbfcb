//! Deadlock-detection memory carried between ticks.

use cs_core::Position;

/// The last observed position and how many consecutive ticks it has not
/// changed.
///
/// Owned by the caller, one per agent, and passed by `&mut` into every
/// decision.  Never share one instance between agents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AgentMemory {
    last_position:    Option<Position>,
    stationary_ticks: u32,
}

impl AgentMemory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn last_position(&self) -> Option<Position> {
        self.last_position
    }

    /// Consecutive ticks on which the reported position equalled the
    /// previous tick's.  The tick that arrives on a tile does not count.
    #[inline]
    pub fn stationary_ticks(&self) -> u32 {
        self.stationary_ticks
    }

    /// Record this tick's position and return the updated counter.
    pub fn observe(&mut self, pos: Position) -> u32 {
        if self.last_position == Some(pos) {
            self.stationary_ticks += 1;
        } else {
            self.stationary_ticks = 0;
        }
        self.last_position = Some(pos);
        self.stationary_ticks
    }

    /// Zero the counter after a forced recovery move.  The last position is
    /// kept so the next tick is still compared against it.
    #[inline]
    pub fn clear_stationary(&mut self) {
        self.stationary_ticks = 0;
    }
}
