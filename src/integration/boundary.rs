use bitflags::bitflags;

use crate::math::{Aabb, Vector2};

bitflags! {
    /// World walls touched during a boundary pass.
    ///
    /// `TOP` is the `y = 0` wall and `BOTTOM` the `y = height` wall.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BoundaryContact: u8 {
        const LEFT = 0x01;
        const RIGHT = 0x02;
        const TOP = 0x04;
        const BOTTOM = 0x08;
    }
}

impl BoundaryContact {
    /// True if a left or right wall was hit
    pub fn hit_x(&self) -> bool {
        self.intersects(Self::LEFT | Self::RIGHT)
    }

    /// True if a top or bottom wall was hit
    pub fn hit_y(&self) -> bool {
        self.intersects(Self::TOP | Self::BOTTOM)
    }
}

/// Clamps a circle center into `[r, w - r] x [r, h - r]`, reflecting and
/// scaling the velocity component of every axis that was clamped.
///
/// Each axis is tested on its own; the low wall wins when the circle is
/// wider than the world.
pub fn confine_circle(
    center: &mut Vector2,
    velocity: &mut Vector2,
    radius: f32,
    width: f32,
    height: f32,
    bounce: f32,
) -> BoundaryContact {
    let mut contact = BoundaryContact::empty();

    if center.x - radius < 0.0 {
        center.x = radius;
        contact |= BoundaryContact::LEFT;
    } else if center.x + radius > width {
        center.x = width - radius;
        contact |= BoundaryContact::RIGHT;
    }

    if center.y - radius < 0.0 {
        center.y = radius;
        contact |= BoundaryContact::TOP;
    } else if center.y + radius > height {
        center.y = height - radius;
        contact |= BoundaryContact::BOTTOM;
    }

    reflect_velocity(velocity, contact, bounce);
    contact
}

/// Offset that pushes a bounding box back inside `[0, w] x [0, h]`.
///
/// The offset is the exact overflow on each axis, so applying it to every
/// vertex keeps the shape intact.
pub fn polygon_overflow(bounds: &Aabb, width: f32, height: f32) -> (Vector2, BoundaryContact) {
    let mut offset = Vector2::ZERO;
    let mut contact = BoundaryContact::empty();

    if bounds.min.x < 0.0 {
        offset.x = -bounds.min.x;
        contact |= BoundaryContact::LEFT;
    } else if bounds.max.x > width {
        offset.x = width - bounds.max.x;
        contact |= BoundaryContact::RIGHT;
    }

    if bounds.min.y < 0.0 {
        offset.y = -bounds.min.y;
        contact |= BoundaryContact::TOP;
    } else if bounds.max.y > height {
        offset.y = height - bounds.max.y;
        contact |= BoundaryContact::BOTTOM;
    }

    (offset, contact)
}

/// Reflects the velocity components of the axes in `contact`
pub fn reflect_velocity(velocity: &mut Vector2, contact: BoundaryContact, bounce: f32) {
    if contact.hit_x() {
        velocity.x *= -bounce;
    }
    if contact.hit_y() {
        velocity.y *= -bounce;
    }
}
