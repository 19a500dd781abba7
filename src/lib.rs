//! Real-time 2D rigid-body physics for circles and convex polygons.
//!
//! Bodies translate but never rotate. A simulation tick is driven from the
//! outside in a fixed order: apply forces to every body, detect and resolve
//! collisions for every unordered pair, then integrate every body against
//! the world bounds. [`PhysicsWorld::step`] runs that sequence, and each
//! piece is also callable on its own.

pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod forces;
pub mod integration;

/// Re-export common types for easier usage
pub use crate::core::{BodyHandle, PhysicsWorld, SimulationConfig};
pub use crate::bodies::{Color, Particle, RigidBody};
pub use crate::collision::{detect_collision, resolve_collision, CollisionInfo};
pub use crate::forces::{Force, ForceType};
pub use crate::math::Vector2;
pub use crate::shapes::{Shape, ShapeKind};

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Degenerate shape: {0}")]
        DegenerateShape(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
