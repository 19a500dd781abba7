use crate::error::PhysicsError;
use crate::math::{Aabb, Vector2};
use crate::Result;

/// A circle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Vector2,
    radius: f32,
}

impl Circle {
    /// Creates a circle, rejecting a non-positive or non-finite radius
    pub fn new(center: Vector2, radius: f32) -> Result<Self> {
        if !center.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "circle center must be finite, got {}",
                center
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "circle radius must be positive, got {}",
                radius
            )));
        }

        Ok(Self { center, radius })
    }

    pub fn get_center(&self) -> Vector2 {
        self.center
    }

    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// The center as a one-element vertex list
    pub fn get_vertices(&self) -> &[Vector2] {
        std::slice::from_ref(&self.center)
    }

    /// π·r²
    pub fn area(&self) -> f32 {
        std::f32::consts::PI * self.radius * self.radius
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, Vector2::new(self.radius, self.radius))
    }

    pub fn translate(&mut self, offset: Vector2) {
        self.center += offset;
    }

    pub(crate) fn set_center(&mut self, center: Vector2) {
        self.center = center;
    }
}
