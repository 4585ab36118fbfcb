//! Fluent construction of a [`Pilot`].
//!
//! ```rust,ignore
//! let pilot = PilotBuilder::new(AgentId(0))
//!     .seed(42)
//!     .threat_channel(1)
//!     .build(&env)?;
//! ```

use cs_core::{AgentId, AgentRng, TacticsConfig};
use cs_tactics::{AgentMemory, DecisionLoop};

use crate::{EnvResult, Environment, Pilot, ThreatAccess};

pub struct PilotBuilder {
    id:             AgentId,
    config:         TacticsConfig,
    seed:           u64,
    toroidal:       bool,
    threat_channel: u32,
}

impl PilotBuilder {
    /// Defaults: default tuning, seed 0, toroidal board, threat channel 0.
    pub fn new(id: AgentId) -> Self {
        Self {
            id,
            config:         TacticsConfig::default(),
            seed:           0,
            toroidal:       true,
            threat_channel: 0,
        }
    }

    pub fn config(mut self, config: TacticsConfig) -> Self {
        self.config = config;
        self
    }

    /// Global seed; mixed with the agent id so pilots sharing a seed diverge.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Whether the board wraps.  Defaults to `true`.
    pub fn toroidal(mut self, toroidal: bool) -> Self {
        self.toroidal = toroidal;
        self
    }

    /// Channel passed to the channel-indexed threat accessor.
    pub fn threat_channel(mut self, channel: u32) -> Self {
        self.threat_channel = channel;
        self
    }

    /// Validate the tuning, pick the threat accessor for `env`, and build.
    pub fn build<E: Environment + ?Sized>(self, env: &E) -> EnvResult<Pilot> {
        let brain = DecisionLoop::new(self.config)?;
        Ok(Pilot {
            id:       self.id,
            brain,
            memory:   AgentMemory::new(),
            rng:      AgentRng::new(self.seed, self.id),
            access:   ThreatAccess::select(env, self.threat_channel),
            toroidal: self.toroidal,
            last:     None,
        })
    }
}
