pub mod states;
pub mod params;
pub mod error;
pub mod spawn;
pub mod collision;
pub mod integrator;
pub mod scenario;
