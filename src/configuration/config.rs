//! Configuration types for loading sandbox scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! sandbox scenario. A scenario consists of:
//!
//! - [`RoomConfig`]    – cubic cavity dimensions
//! - [`SpawnConfig`]   – body count, radius/velocity bounds, spawn floor, seed
//! - [`PhysicsConfig`] – gravity, restitution, damping, collision model
//! - [`RunConfig`]     – headless run length and step sizes
//! - [`SandboxConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! room:
//!   size: 6.0                # edge length of the cubic cavity
//!
//! spawn:
//!   count: 100               # bodies to spawn
//!   radius_min: 0.05         # radius bounds; equal min/max -> fixed radius
//!   radius_max: 0.12
//!   velocity_min: 0.005      # per-axis speed bounds, sign chosen at random
//!   velocity_max: 0.01
//!   spawn_floor: 1.0         # optional, keeps spawns off the floor
//!   mass_density: 10.0       # mass = radius * mass_density
//!   seed: 42                 # deterministic seed
//!
//! physics:
//!   gravity: 9.8             # acceleration along -y
//!   floor_restitution: -0.8  # signed vertical-bounce multiplier
//!   lateral_damping: 0.98    # x/z multiplier on a floor/ceiling bounce
//!   collision: "mass-weighted"   # or "normal-exchange"
//!   held_gravity: "suspend"      # or "accumulate"
//!
//! run:
//!   t_end: 10.0              # total simulation time
//!   h0: 0.016                # per-frame step size
//!   max_dt: 0.1              # host-side clamp on a single step
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation ([`crate::simulation::scenario::Scenario`]).

use serde::Deserialize;

/// Which pairwise collision response model the stepper uses.
/// `collision: "mass-weighted"` or `collision: "normal-exchange"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionModelConfig {
    #[serde(rename = "mass-weighted")] // Two-body elastic exchange weighted by mass. Conserves momentum; the primary model
    MassWeighted,

    #[serde(rename = "normal-exchange")] // Moves the normal-projected relative velocity from one body to the other. Historical uniform-mass variant
    NormalExchange,
}

/// Whether gravity keeps accumulating into a held body's velocity.
/// `held_gravity: "suspend"` or `held_gravity: "accumulate"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldGravityConfig {
    #[serde(rename = "suspend")] // No gravity while held; velocity is frozen until release
    Suspend,

    #[serde(rename = "accumulate")] // Gravity still updates velocity, so the body "catches up" on release
    Accumulate,
}

/// Cubic cavity dimensions.
#[derive(Deserialize, Debug, Clone)]
pub struct RoomConfig {
    pub size: f64, // edge length; x,z span [-size/2, size/2], y spans [0, size]
}

/// Spawn-batch parameters for (re)populating a room.
#[derive(Deserialize, Debug, Clone)]
pub struct SpawnConfig {
    pub count: usize,             // bodies per spawn batch
    pub radius_min: f64,          // lower radius bound
    pub radius_max: f64,          // upper radius bound; equal bounds -> fixed radius
    pub velocity_min: f64,        // per-axis speed lower bound
    pub velocity_max: f64,        // per-axis speed upper bound
    pub spawn_floor: Option<f64>, // minimum spawn height above the floor, default 0
    pub mass_density: f64,        // mass = radius * mass_density
    pub seed: u64,                // deterministic seed to make runs reproducible
}

/// Physical constants and model selection for the stepper.
#[derive(Deserialize, Debug, Clone)]
pub struct PhysicsConfig {
    pub gravity: f64,                            // acceleration magnitude along -y
    pub floor_restitution: f64,                  // signed multiplier on v.y at floor/ceiling, reference -0.8
    pub lateral_damping: f64,                    // x/z multiplier on a vertical bounce, reference 0.98
    pub collision: CollisionModelConfig,         // pairwise response model
    pub held_gravity: Option<HeldGravityConfig>, // held-body gravity policy, default suspend
}

/// Headless run settings consumed by the binary's host loop.
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    pub t_end: f64,  // total simulation time
    pub h0: f64,     // per-frame step size
    pub max_dt: f64, // clamp on a single step to bound integration error
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct SandboxConfig {
    pub room: RoomConfig,       // cavity dimensions
    pub spawn: SpawnConfig,     // spawn-batch parameters
    pub physics: PhysicsConfig, // physical constants and model selection
    pub run: RunConfig,         // host-loop settings
}
