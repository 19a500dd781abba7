use crate::bodies::RigidBody;
use crate::collision::CollisionInfo;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Constants of the impulse and positional-correction step
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ContactParams {
    /// Coefficient of restitution `e`
    pub restitution: f32,

    /// Fraction of the penetration removed per resolution (Baumgarte factor)
    pub correction_percent: f32,

    /// Penetration tolerated without correction
    pub slop: f32,
}

impl Default for ContactParams {
    fn default() -> Self {
        Self {
            restitution: 0.6,
            correction_percent: 0.2,
            slop: 0.01,
        }
    }
}

/// Resolves a detected collision with the default [`ContactParams`].
///
/// Returns the impulse magnitude applied, or `None` when nothing was done.
pub fn resolve_collision(a: &mut RigidBody, b: &mut RigidBody, info: &CollisionInfo) -> Option<f32> {
    resolve_collision_with(a, b, info, &ContactParams::default())
}

/// Applies an impulse along `info.normal` (away from `b` for `a`, toward it
/// for `b`), then nudges both bodies apart by a fraction of the penetration.
///
/// Skipped entirely when there is no collision, when the bodies already
/// separate along the normal, or when both are massless.
pub fn resolve_collision_with(
    a: &mut RigidBody,
    b: &mut RigidBody,
    info: &CollisionInfo,
    params: &ContactParams,
) -> Option<f32> {
    if !info.has_collision {
        return None;
    }

    let relative_velocity = b.get_velocity() - a.get_velocity();
    let vel_along_normal = relative_velocity.dot(&info.normal);
    if vel_along_normal >= 0.0 {
        return None;
    }

    let inv_mass_a = a.get_inverse_mass();
    let inv_mass_b = b.get_inverse_mass();
    let inv_mass_sum = inv_mass_a + inv_mass_b;
    if inv_mass_sum <= 0.0 {
        return None;
    }

    let j = -(1.0 + params.restitution) * vel_along_normal / inv_mass_sum;
    let impulse = info.normal * j;
    a.apply_impulse(-impulse);
    b.apply_impulse(impulse);

    let depth = (info.penetration_depth - params.slop).max(0.0);
    let correction = info.normal * (depth * params.correction_percent / inv_mass_sum);
    a.translate(-correction * inv_mass_a);
    b.translate(correction * inv_mass_b);

    Some(j)
}
