use crate::math::Vector2;

/// Linear drag opposing the body's velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    coefficient: f32,
}

impl Drag {
    /// Creates a drag force; negative coefficients are clamped to zero
    pub fn new(coefficient: f32) -> Self {
        Self {
            coefficient: coefficient.max(0.0),
        }
    }

    pub fn get_coefficient(&self) -> f32 {
        self.coefficient
    }

    /// F = -k * v
    pub fn compute(&self, velocity: Vector2) -> Vector2 {
        velocity * -self.coefficient
    }
}
