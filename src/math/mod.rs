mod vector;
mod aabb;

pub use vector::{dot, length, normalize, Vector2};
pub use aabb::Aabb;
