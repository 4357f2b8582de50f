use std::time::Instant;

use crate::configuration::config::{CollisionModelConfig, HeldGravityConfig};
use crate::simulation::integrator::step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, Room};

/// Helper to build a populated room of `n` bodies.
fn make_room(n: usize) -> Room {
    let mut room = Room::new(6.0);
    room.bodies.reserve(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 2.5,
            3.0 + (i_f * 0.13).cos() * 2.4,
            (i_f * 0.07).sin() * 2.5,
        );

        room.bodies.push(Body {
            x,
            v: NVec3::new(0.01, 0.0, -0.01),
            m: 0.8,
            radius: 0.08,
            held: false,
        });
    }

    room
}

/// Helper to build stepper parameters for a given collision model.
fn make_params(collision: CollisionModelConfig) -> Parameters {
    Parameters {
        gravity: 9.8,
        floor_restitution: -0.8,
        lateral_damping: 0.98,
        collision,
        held_gravity: HeldGravityConfig::Suspend,
        t_end: 100.0,
        h0: 0.016,
        max_dt: 0.1,
    }
}

/// Time a single step for both collision models over a range of body counts.
pub fn bench_step() {
    // Different room populations to test
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 5; // steps per model, averaged

    for n in ns {
        // Mass-weighted model
        let mut room_mw = make_room(n);
        let params_mw = make_params(CollisionModelConfig::MassWeighted);

        // Warm up
        step(&mut room_mw, &params_mw, params_mw.h0);

        let t0 = Instant::now();
        for _ in 0..steps {
            step(&mut room_mw, &params_mw, params_mw.h0);
        }
        let mw_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        // Normal-exchange model
        let mut room_ne = make_room(n);
        let params_ne = make_params(CollisionModelConfig::NormalExchange);

        // Warm up
        step(&mut room_ne, &params_ne, params_ne.h0);

        let t1 = Instant::now();
        for _ in 0..steps {
            step(&mut room_ne, &params_ne, params_ne.h0);
        }
        let ne_per_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:5}, mass-weighted step = {:8.6} s, normal-exchange step = {:8.6} s",
            mw_per_step, ne_per_step
        );
    }
}

/// Benchmark the stepper over a fine-grained range of n.
/// Paste output directly into a spreadsheet to graph.
pub fn bench_step_curve() {
    println!("N,mass_weighted_ms,normal_exchange_ms");

    // Steps of 100 to give a smoother graph
    for n in (100..=3200).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 2 };

        let mut room_mw = make_room(n);
        let params_mw = make_params(CollisionModelConfig::MassWeighted);

        let t0 = Instant::now();
        for _ in 0..steps {
            step(&mut room_mw, &params_mw, params_mw.h0);
        }
        let ms_mw = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut room_ne = make_room(n);
        let params_ne = make_params(CollisionModelConfig::NormalExchange);

        let t1 = Instant::now();
        for _ in 0..steps {
            step(&mut room_ne, &params_ne, params_ne.h0);
        }
        let ms_ne = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_mw, ms_ne);
    }
}
