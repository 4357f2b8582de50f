//! Runtime parameters for the simulation.
//!
//! `Parameters` holds the stepper's settings:
//! - gravity and bounce constants (`gravity`, `floor_restitution`, `lateral_damping`),
//! - collision-response model and held-body gravity policy,
//! - run length and step sizes for the host loop.
//!
//! `SpawnParams` holds everything the spawn batch needs: count, radius and
//! velocity bounds, spawn floor, mass density, and the RNG seed.

use crate::configuration::config::{CollisionModelConfig, HeldGravityConfig};

#[derive(Debug, Clone)]
pub struct Parameters {
    pub gravity: f64, // acceleration along -y
    pub floor_restitution: f64, // signed v.y multiplier on floor/ceiling contact
    pub lateral_damping: f64, // x/z multiplier on floor/ceiling contact
    pub collision: CollisionModelConfig, // mass-weighted or normal-exchange
    pub held_gravity: HeldGravityConfig, // suspend or accumulate while held
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub max_dt: f64, // host-side clamp on a single step
}

#[derive(Debug, Clone)]
pub struct SpawnParams {
    pub count: usize, // bodies per batch
    pub radius_min: f64, // radius bounds
    pub radius_max: f64,
    pub velocity_min: f64, // per-axis speed bounds
    pub velocity_max: f64,
    pub spawn_floor: f64, // minimum spawn height above the floor
    pub mass_density: f64, // mass = radius * mass_density
    pub seed: u64, // deterministic seed
}
