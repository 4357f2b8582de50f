//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `SandboxConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - spawn-batch parameters (`SpawnParams`)
//! - room state (`Room` populated at t = 0)
//! - the seeded RNG used for spawning
//!
//! The host drives the bundle through [`Scenario::advance`] once per frame
//! and re-populates it through [`Scenario::respawn`] when structural
//! parameters (room size, count, radius bounds) change.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{HeldGravityConfig, SandboxConfig};
use crate::simulation::error::ConfigurationError;
use crate::simulation::integrator::step;
use crate::simulation::params::{Parameters, SpawnParams};
use crate::simulation::spawn::{clear, spawn};
use crate::simulation::states::Room;

/// A fully-initialized runtime scenario.
pub struct Scenario {
    pub parameters: Parameters,
    pub spawn: SpawnParams,
    pub room: Room,
    pub t: f64,
    rng: StdRng,
}

impl Scenario {
    /// Map a [`SandboxConfig`] into a populated runtime scenario at t = 0.
    pub fn build_scenario(cfg: SandboxConfig) -> Result<Self, ConfigurationError> {
        // Parameters (runtime) from PhysicsConfig + RunConfig
        let p_cfg = cfg.physics;
        let parameters = Parameters {
            gravity: p_cfg.gravity,
            floor_restitution: p_cfg.floor_restitution,
            lateral_damping: p_cfg.lateral_damping,
            collision: p_cfg.collision,
            held_gravity: p_cfg.held_gravity.unwrap_or(HeldGravityConfig::Suspend),
            t_end: cfg.run.t_end,
            h0: cfg.run.h0,
            max_dt: cfg.run.max_dt,
        };

        // Spawn parameters (runtime) from SpawnConfig
        let s_cfg = cfg.spawn;
        let spawn_params = SpawnParams {
            count: s_cfg.count,
            radius_min: s_cfg.radius_min,
            radius_max: s_cfg.radius_max,
            velocity_min: s_cfg.velocity_min,
            velocity_max: s_cfg.velocity_max,
            spawn_floor: s_cfg.spawn_floor.unwrap_or(0.0),
            mass_density: s_cfg.mass_density,
            seed: s_cfg.seed,
        };

        // Initial room state: bodies spawned at t = 0
        let mut room = Room::new(cfg.room.size);
        let mut rng = StdRng::seed_from_u64(spawn_params.seed);
        spawn(&mut room, &spawn_params, &mut rng)?;

        Ok(Self {
            parameters,
            spawn: spawn_params,
            room,
            t: 0.0,
            rng,
        })
    }

    /// Empty the room and spawn a fresh batch with the current parameters.
    ///
    /// Used after a structural parameter change; validation failure leaves
    /// the room empty rather than half-populated.
    pub fn respawn(&mut self) -> Result<(), ConfigurationError> {
        clear(&mut self.room);
        spawn(&mut self.room, &self.spawn, &mut self.rng)
    }

    /// Advance the scenario by one frame.
    ///
    /// The host-side dt clamp lives here: a frame hitch longer than
    /// `max_dt` is stepped as `max_dt` to bound integration error.
    pub fn advance(&mut self, dt: f64) {
        let dt = dt.min(self.parameters.max_dt);
        step(&mut self.room, &self.parameters, dt);
        self.t += dt;
    }
}
