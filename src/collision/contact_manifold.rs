use crate::math::Vector2;

/// Result of a pairwise intersection test.
///
/// `normal`, `point` and `penetration_depth` only carry meaning while
/// `has_collision` is true; a miss leaves them zeroed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionInfo {
    /// Whether the shapes overlap
    pub has_collision: bool,

    /// Unit collision normal. Orientation depends on the shape pair; see
    /// [`detect_collision`](crate::collision::detect_collision).
    pub normal: Vector2,

    /// Approximate contact point
    pub point: Vector2,

    /// Overlap distance along `normal`
    pub penetration_depth: f32,
}

impl CollisionInfo {
    /// The "no collision" sentinel
    pub fn none() -> Self {
        Self::default()
    }

    /// A hit with the given normal, contact point and depth
    pub fn hit(normal: Vector2, point: Vector2, penetration_depth: f32) -> Self {
        Self {
            has_collision: true,
            normal,
            point,
            penetration_depth,
        }
    }

    /// Same contact seen from the other body: the normal is reversed
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            ..self
        }
    }
}
