use roomsim::{SandboxConfig, Scenario};
use roomsim::{bench_step, bench_step_curve};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "sandbox.yaml")]
    file_name: String,

    /// Run the step benchmarks instead of a scenario
    #[arg(long, default_value_t = false)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<SandboxConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let sandbox_cfg: SandboxConfig = serde_yaml::from_reader(reader)?;

    Ok(sandbox_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step();
        bench_step_curve();
        return Ok(());
    }

    let sandbox_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(sandbox_cfg).context("failed to build scenario")?;

    let h0 = scenario.parameters.h0;
    let t_end = scenario.parameters.t_end;

    let mut steps = 0u64;
    while scenario.t < t_end {
        scenario.advance(h0);
        steps += 1;
    }

    // Run summary: population, simulated time, kinetic energy, peak speed
    let kinetic: f64 = scenario
        .room
        .bodies
        .iter()
        .map(|b| 0.5 * b.m * b.v.norm_squared())
        .sum();
    let peak_speed = scenario
        .room
        .bodies
        .iter()
        .map(|b| b.v.norm())
        .fold(0.0_f64, f64::max);

    println!(
        "bodies = {}, t = {:.3} s, steps = {}, kinetic = {:.6}, peak speed = {:.6}",
        scenario.room.bodies.len(),
        scenario.t,
        steps,
        kinetic,
        peak_speed
    );

    Ok(())
}
