use crate::collision::CollisionInfo;
use crate::core::BodyHandle;

/// A collision between two rigid bodies found during a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Lower-index body of the pair
    pub body_a: BodyHandle,

    /// Higher-index body of the pair
    pub body_b: BodyHandle,

    /// Detection result; the normal points from `body_a`'s side per the
    /// shape-pair convention
    pub info: CollisionInfo,

    /// Impulse magnitude applied, `None` if the bodies were already separating
    pub impulse: Option<f32>,
}
