mod rigid_body;
mod particle;
mod color;

pub use self::rigid_body::RigidBody;
pub use self::particle::{Particle, ParticleBoundary};
pub use self::color::Color;

/// Flags for controlling body behavior
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Flags for controlling the behavior of bodies
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct BodyFlags: u32 {
            /// Body feels the world's shared gravity on top of its attached forces
            const AFFECTED_BY_GRAVITY = 0x01;

            /// Body takes part in pairwise collision detection
            const COLLIDABLE = 0x02;
        }
    }
}
