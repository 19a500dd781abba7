pub mod symplectic_euler;
mod boundary;

pub use self::boundary::{confine_circle, polygon_overflow, reflect_velocity, BoundaryContact};

/// Fraction of velocity kept (and reversed) when a rigid body hits a world wall
pub const BOUNDARY_BOUNCE: f32 = 0.5;
