mod contact_manifold;
mod narrow_phase;
mod contact_solver;
pub mod sat;

pub use self::contact_manifold::CollisionInfo;
pub use self::narrow_phase::{circle_vs_circle, circle_vs_polygon, detect_collision};
pub use self::contact_solver::{resolve_collision, resolve_collision_with, ContactParams};
