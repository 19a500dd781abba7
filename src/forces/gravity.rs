use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Uniform gravitational acceleration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Gravity {
    pub gx: f32,
    pub gy: f32,
}

impl Gravity {
    pub fn new(gx: f32, gy: f32) -> Self {
        Self { gx, gy }
    }

    pub fn get_acceleration(&self) -> Vector2 {
        Vector2::new(self.gx, self.gy)
    }

    /// F = m * g
    pub fn compute(&self, mass: f32) -> Vector2 {
        self.get_acceleration() * mass
    }
}

impl Default for Gravity {
    /// Downward on screen, matching the default world gravity
    fn default() -> Self {
        Self::new(0.0, 9.8)
    }
}

impl From<Vector2> for Gravity {
    fn from(acceleration: Vector2) -> Self {
        Self::new(acceleration.x, acceleration.y)
    }
}
