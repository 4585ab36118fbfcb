//! One agent driven by an [`Environment`].

use cs_core::{AgentId, AgentRng, Direction, Position};
use cs_grid::Grid;
use cs_tactics::{AgentMemory, Decision, DecisionLoop, Snapshot};
use log::{trace, warn};

use crate::{EnvError, EnvResult, Environment, ThreatAccess, parse_position};

/// Owns everything that persists between one agent's ticks: the decision
/// loop, the stuck-detection memory, the RNG, and the threat accessor chosen
/// at setup.
///
/// Build with [`PilotBuilder`][crate::PilotBuilder].
#[derive(Debug)]
pub struct Pilot {
    pub(crate) id:       AgentId,
    pub(crate) brain:    DecisionLoop,
    pub(crate) memory:   AgentMemory,
    pub(crate) rng:      AgentRng,
    pub(crate) access:   ThreatAccess,
    pub(crate) toroidal: bool,
    pub(crate) last:     Option<Decision>,
}

impl Pilot {
    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn brain(&self) -> &DecisionLoop {
        &self.brain
    }

    pub fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    pub fn access(&self) -> ThreatAccess {
        self.access
    }

    /// The decision made by the most recent [`tick`][Self::tick].
    pub fn last_decision(&self) -> Option<Decision> {
        self.last
    }

    /// Read and validate the board.
    pub fn read_grid<E: Environment + ?Sized>(&self, env: &E) -> EnvResult<Grid> {
        let columns = env.board().ok_or(EnvError::MissingBoard)?;
        Ok(Grid::from_columns(columns, self.toroidal)?)
    }

    /// Read and parse the agent position.
    pub fn read_position<E: Environment + ?Sized>(&self, env: &E) -> EnvResult<Position> {
        let raw = env.agent_position().ok_or(EnvError::MissingPosition)?;
        Ok(parse_position(&raw)?)
    }

    /// Run one tick against `env` and return the move to make.
    ///
    /// Never fails: unreadable input becomes `Stay` without touching the
    /// stuck-detection memory.
    pub fn tick<E: Environment + ?Sized>(&mut self, env: &E) -> Direction {
        let grid = self
            .read_grid(env)
            .map_err(|e| warn!("[Pilot] {}: {e}", self.id))
            .ok();
        let agent = self
            .read_position(env)
            .map_err(|e| warn!("[Pilot] {}: {e}", self.id))
            .ok();
        let threats = self.access.fetch(env);

        let snapshot = Snapshot { grid: grid.as_ref(), agent, threats: &threats };
        let decision = self.brain.decide(&snapshot, &mut self.memory, &mut self.rng);
        trace!(
            "[Pilot] {}: {} via {} ({} threats)",
            self.id,
            decision.direction,
            decision.tier,
            threats.len()
        );
        self.last = Some(decision);
        decision.direction
    }
}
