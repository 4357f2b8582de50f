//! Boundary containment and pairwise sphere-sphere collision response.
//!
//! `confine` clamps a body back into the cubic cavity and applies the bounce
//! response per axis; `resolve_against` runs one body's pairwise resolution
//! against the current state of every other body in the room. Both operate
//! in place on body state and report nothing beyond the containment flag —
//! boundary contact is a silent correction, not an event.

use crate::configuration::config::CollisionModelConfig;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Room};

/// Clamp `body` into the room and apply the per-axis bounce response.
///
/// x/z walls reflect the velocity component exactly; the floor and ceiling
/// apply the signed `floor_restitution` multiplier to `v.y` and damp the two
/// lateral components by `lateral_damping` (floor friction couples energy
/// loss into all axes). Returns whether any axis had to be corrected.
pub fn confine(body: &mut Body, room_size: f64, params: &Parameters) -> bool {
    let range = room_size / 2.0 - body.radius;
    let mut corrected = false;

    if body.x.x < -range || body.x.x > range {
        body.x.x = body.x.x.clamp(-range, range);
        body.v.x = -body.v.x;
        corrected = true;
    }

    let floor = body.radius;
    let ceiling = room_size - body.radius;
    if body.x.y < floor || body.x.y > ceiling {
        body.x.y = body.x.y.clamp(floor, ceiling);
        body.v.y *= params.floor_restitution;
        body.v.x *= params.lateral_damping;
        body.v.z *= params.lateral_damping;
        corrected = true;
    }

    if body.x.z < -range || body.x.z > range {
        body.x.z = body.x.z.clamp(-range, range);
        body.v.z = -body.v.z;
        corrected = true;
    }

    corrected
}

/// Resolve body `i` against every other body in the room, in storage order.
///
/// Within one step each unordered pair is visited from both sides, but the
/// positional correction leaves a resolved pair exactly in contact, so the
/// mirrored visit fails the strict overlap test and is a no-op.
pub fn resolve_against(room: &mut Room, i: usize, params: &Parameters) {
    for j in 0..room.bodies.len() {
        if j == i {
            continue;
        }
        let (a, b) = pair_mut(&mut room.bodies, i, j);
        resolve_pair(a, b, params.collision);
    }
}

/// Resolve one potentially overlapping pair in place.
///
/// On overlap the bodies are pushed apart symmetrically along the contact
/// normal by half the penetration depth each (the midpoint is conserved),
/// then the configured velocity response is applied.
pub fn resolve_pair(a: &mut Body, b: &mut Body, model: CollisionModelConfig) {
    let delta = a.x - b.x;
    let distance = delta.norm();
    let contact = a.radius + b.radius;

    if distance >= contact {
        return;
    }
    // Coincident centers have no defined contact normal
    if distance <= f64::EPSILON {
        return;
    }

    let normal = delta / distance;

    let push = normal * (0.5 * (contact - distance));
    a.x += push;
    b.x -= push;

    match model {
        CollisionModelConfig::MassWeighted => {
            // Two-body elastic exchange applied to the full velocity vectors
            let total = a.m + b.m;
            let va = a.v;
            let vb = b.v;
            a.v = ((a.m - b.m) * va + 2.0 * b.m * vb) / total;
            b.v = ((b.m - a.m) * vb + 2.0 * a.m * va) / total;
        }
        CollisionModelConfig::NormalExchange => {
            // Move the normal-projected relative velocity from a to b
            let relative = a.v - b.v;
            let k = relative.dot(&normal);
            a.v -= k * normal;
            b.v += k * normal;
        }
    }
}

/// Disjoint mutable borrows of bodies `i` and `j`.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
