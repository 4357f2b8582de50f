pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, Room, NVec3};
pub use simulation::params::{Parameters, SpawnParams};
pub use simulation::error::ConfigurationError;
pub use simulation::spawn::{spawn, clear, validate};
pub use simulation::collision::{confine, resolve_pair, resolve_against};
pub use simulation::integrator::{step, integrate, apply_gravity};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    SandboxConfig, RoomConfig, SpawnConfig, PhysicsConfig, RunConfig,
    CollisionModelConfig, HeldGravityConfig,
};

pub use benchmark::benchmark::{bench_step, bench_step_curve};
