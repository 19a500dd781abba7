pub mod world;
pub mod config;
pub mod events;

pub use self::world::PhysicsWorld;
pub use self::config::{ParticleConfig, SimulationConfig};
pub use self::events::CollisionEvent;

use std::fmt;

/// A unique identifier for a body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
