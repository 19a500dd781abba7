use crate::math::Vector2;

/// A damped spring tying a body's center of mass to a fixed world point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    anchor: Vector2,
    stiffness: f32,
    rest_length: f32,
    damping: f32,
}

impl Spring {
    /// Creates an undamped spring. Negative stiffness or rest length is clamped to zero.
    pub fn new(anchor: Vector2, stiffness: f32, rest_length: f32) -> Self {
        Self {
            anchor,
            stiffness: stiffness.max(0.0),
            rest_length: rest_length.max(0.0),
            damping: 0.0,
        }
    }

    /// Adds damping along the spring axis
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping.max(0.0);
        self
    }

    pub fn get_anchor(&self) -> Vector2 {
        self.anchor
    }

    pub fn get_stiffness(&self) -> f32 {
        self.stiffness
    }

    pub fn get_rest_length(&self) -> f32 {
        self.rest_length
    }

    pub fn get_damping(&self) -> f32 {
        self.damping
    }

    /// Hooke's law along the anchor-to-body axis, plus axial damping.
    /// A body sitting exactly on the anchor feels no force.
    pub fn compute(&self, position: Vector2, velocity: Vector2) -> Vector2 {
        let offset = position - self.anchor;
        let distance = offset.length();
        if distance == 0.0 {
            return Vector2::ZERO;
        }

        let direction = offset / distance;
        let stretch = distance - self.rest_length;
        let axial_speed = velocity.dot(&direction);

        direction * (-self.stiffness * stretch - self.damping * axial_speed)
    }
}
