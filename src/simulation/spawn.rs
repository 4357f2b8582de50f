//! Batch spawning and clearing of bodies.
//!
//! `spawn` appends `count` bodies with random interior positions and random
//! per-axis velocities; `clear` empties the room. These are the only
//! structural mutators of a room's body collection — the stepper never adds
//! or removes bodies.
//!
//! Spawning is atomic: parameters are validated up front and the batch is
//! built in full before it is appended, so an error leaves the room unchanged.

use rand::rngs::StdRng;
use rand::Rng;

use crate::simulation::error::ConfigurationError;
use crate::simulation::params::SpawnParams;
use crate::simulation::states::{Body, NVec3, Room};

/// Check that a spawn batch can be placed inside `room`.
pub fn validate(room: &Room, spawn: &SpawnParams) -> Result<(), ConfigurationError> {
    if spawn.radius_max < spawn.radius_min {
        return Err(ConfigurationError::RadiusBounds {
            min: spawn.radius_min,
            max: spawn.radius_max,
        });
    }
    if spawn.velocity_max < spawn.velocity_min {
        return Err(ConfigurationError::VelocityBounds {
            min: spawn.velocity_min,
            max: spawn.velocity_max,
        });
    }
    if room.size <= 2.0 * spawn.radius_max {
        return Err(ConfigurationError::RoomTooSmall {
            size: room.size,
            radius: spawn.radius_max,
        });
    }
    // Vertical interval for the largest sphere: [floor + r, size - r]
    if spawn.spawn_floor > room.size - 2.0 * spawn.radius_max {
        return Err(ConfigurationError::SpawnFloorTooHigh {
            floor: spawn.spawn_floor,
            size: room.size,
        });
    }
    Ok(())
}

/// Append `spawn.count` new bodies to `room`.
///
/// Each body gets a radius in `[radius_min, radius_max]`, mass
/// `radius * mass_density`, a position sampled so the sphere is fully
/// interior (and above the spawn floor), and a velocity whose axes are
/// independent speeds in `[velocity_min, velocity_max]` with random sign.
pub fn spawn(room: &mut Room, spawn: &SpawnParams, rng: &mut StdRng) -> Result<(), ConfigurationError> {
    validate(room, spawn)?;

    let mut batch = Vec::with_capacity(spawn.count);
    for _ in 0..spawn.count {
        let radius = rng.gen_range(spawn.radius_min..=spawn.radius_max);

        // Fully interior placement: the center stays one radius off every wall
        let range = room.size / 2.0 - radius;
        let x = NVec3::new(
            rng.gen_range(-range..=range),
            rng.gen_range((spawn.spawn_floor + radius)..=(room.size - radius)),
            rng.gen_range(-range..=range),
        );

        let v = NVec3::new(
            rng.gen_range(spawn.velocity_min..=spawn.velocity_max) * random_sign(rng),
            rng.gen_range(spawn.velocity_min..=spawn.velocity_max) * random_sign(rng),
            rng.gen_range(spawn.velocity_min..=spawn.velocity_max) * random_sign(rng),
        );

        batch.push(Body {
            x,
            v,
            m: radius * spawn.mass_density,
            radius,
            held: false,
        });
    }

    room.bodies.extend(batch);
    Ok(())
}

/// Remove every body from `room`.
pub fn clear(room: &mut Room) {
    room.bodies.clear();
}

fn random_sign(rng: &mut StdRng) -> f64 {
    if rng.gen::<bool>() {
        1.0
    } else {
        -1.0
    }
}
