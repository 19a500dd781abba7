use std::fmt;

use crate::bodies::RigidBody;
use crate::forces::{Drag, Gravity, Spring};
use crate::math::Vector2;

/// Tag identifying the kind of an attached force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForceType {
    Gravity,
    Drag,
    Spring,
    Custom,
}

/// User-supplied force law. Must be pure: read the body, never mutate it.
#[derive(Clone, Copy)]
pub struct CustomForce(pub fn(&RigidBody) -> Vector2);

impl fmt::Debug for CustomForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomForce(..)")
    }
}

/// A force attached to a body.
///
/// Each variant computes its contribution from the body's current state
/// alone; evaluating a force never changes the body.
#[derive(Debug, Clone, Copy)]
pub enum Force {
    Gravity(Gravity),
    Drag(Drag),
    Spring(Spring),
    Custom(CustomForce),
}

impl Force {
    /// Uniform gravity with acceleration `(gx, gy)`
    pub fn gravity(gx: f32, gy: f32) -> Self {
        Force::Gravity(Gravity::new(gx, gy))
    }

    pub fn drag(coefficient: f32) -> Self {
        Force::Drag(Drag::new(coefficient))
    }

    pub fn spring(anchor: Vector2, stiffness: f32, rest_length: f32) -> Self {
        Force::Spring(Spring::new(anchor, stiffness, rest_length))
    }

    pub fn custom(law: fn(&RigidBody) -> Vector2) -> Self {
        Force::Custom(CustomForce(law))
    }

    pub fn force_type(&self) -> ForceType {
        match self {
            Force::Gravity(_) => ForceType::Gravity,
            Force::Drag(_) => ForceType::Drag,
            Force::Spring(_) => ForceType::Spring,
            Force::Custom(_) => ForceType::Custom,
        }
    }

    /// Force vector acting on `body` right now
    pub fn compute_force(&self, body: &RigidBody) -> Vector2 {
        match self {
            Force::Gravity(gravity) => gravity.compute(body.get_mass()),
            Force::Drag(drag) => drag.compute(body.get_velocity()),
            Force::Spring(spring) => spring.compute(body.get_center_of_mass(), body.get_velocity()),
            Force::Custom(CustomForce(law)) => law(body),
        }
    }
}

impl From<Gravity> for Force {
    fn from(gravity: Gravity) -> Self {
        Force::Gravity(gravity)
    }
}

impl From<Drag> for Force {
    fn from(drag: Drag) -> Self {
        Force::Drag(drag)
    }
}

impl From<Spring> for Force {
    fn from(spring: Spring) -> Self {
        Force::Spring(spring)
    }
}
