//! Error types for the simulation core.
//!
//! The only fallible operation under valid preconditions is spawning:
//! stepping is total over any well-formed room/parameter pair, including the
//! zero-body case. Spawn validation fails fast and leaves the room unchanged.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Radius bounds are inverted.
    #[error("radius bounds inverted: min {min} > max {max}")]
    RadiusBounds { min: f64, max: f64 },

    /// Velocity bounds are inverted.
    #[error("velocity bounds inverted: min {min} > max {max}")]
    VelocityBounds { min: f64, max: f64 },

    /// No interior volume fits a sphere of the largest requested radius.
    #[error("room of size {size} cannot fit a sphere of radius {radius}")]
    RoomTooSmall { size: f64, radius: f64 },

    /// The spawn floor leaves no vertical interval to place a sphere in.
    #[error("spawn floor {floor} leaves no vertical room in a room of size {size}")]
    SpawnFloorTooHigh { floor: f64, size: f64 },
}
