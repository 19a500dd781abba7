use crate::math::Vector2;

/// Semi-implicit (symplectic) Euler for a translating body.
///
/// Velocity is advanced first and the *new* velocity moves the position.
/// Returns the displacement so the caller can shift vertex geometry by the
/// same amount as the center of mass.
#[inline]
pub fn step(velocity: &mut Vector2, acceleration: Vector2, dt: f32) -> Vector2 {
    *velocity += acceleration * dt;
    *velocity * dt
}
