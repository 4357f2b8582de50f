//! Core state types for the room simulation.
//!
//! Defines the body/room structs:
//! - `Body` using `NVec3` (position, velocity, radius, mass, held flag)
//! - `Room` holding the cubic cavity size and the list of bodies
//!
//! The room spans `x,z in [-size/2, size/2]` and `y in [0, size]`
//! (floor at y = 0).

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position (world-space center)
    pub v: NVec3, // velocity, units per second
    pub m: f64, // mass (radius * mass density at spawn)
    pub radius: f64, // collision radius
    pub held: bool, // an external actor owns this body's position
}

#[derive(Debug, Clone)]
pub struct Room {
    pub size: f64, // edge length of the cubic cavity
    pub bodies: Vec<Body>, // collection of bodies, spawn order
}

impl Room {
    /// An empty room of the given edge length.
    pub fn new(size: f64) -> Self {
        Self {
            size,
            bodies: Vec::new(),
        }
    }
}
