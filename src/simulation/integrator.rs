//! Explicit-Euler stepping for the room simulation.
//!
//! `step` advances the whole room by one time step, preserving the
//! per-body interleaving the sandbox is built around: for each body in
//! storage order — integrate its position, confine it to the room, resolve
//! it pairwise against the current (possibly already-updated) state of every
//! other body, then apply gravity to its velocity. Later bodies in the same
//! step therefore see earlier bodies' corrected state.
//!
//! `dt` is expected to be clamped by the host (see `Parameters::max_dt`);
//! the stepper itself does not clamp.

use crate::configuration::config::HeldGravityConfig;
use crate::simulation::collision::{confine, resolve_against};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Room};

/// Advance `body`'s position from its velocity: `x += v * dt`.
///
/// Held bodies are skipped — an external actor is authoritative over their
/// position while the flag is set.
pub fn integrate(body: &mut Body, dt: f64) {
    if body.held {
        return;
    }
    body.x += body.v * dt;
}

/// Accumulate gravity into `body`'s velocity: `v.y -= gravity * dt`.
///
/// For held bodies the configured policy decides whether gravity keeps
/// accumulating (so the body "catches up" on release) or is suspended.
pub fn apply_gravity(body: &mut Body, dt: f64, params: &Parameters) {
    if body.held && params.held_gravity == HeldGravityConfig::Suspend {
        return;
    }
    body.v.y -= params.gravity * dt;
}

/// Advance every body in `room` by one time step.
///
/// Gravity updates each body's velocity exactly once per step, after that
/// body's position update, so integration always uses the velocity as of the
/// start of the body's substep. Held bodies keep their externally-set
/// position but still participate in containment and pairwise resolution,
/// so a pile reacts physically to a body dragged through it.
pub fn step(room: &mut Room, params: &Parameters, dt: f64) {
    let n = room.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let size = room.size;
    for i in 0..n {
        integrate(&mut room.bodies[i], dt);
        confine(&mut room.bodies[i], size, params);
        resolve_against(room, i, params);
        apply_gravity(&mut room.bodies[i], dt, params);
    }
}
