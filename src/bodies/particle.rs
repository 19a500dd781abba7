use log::debug;

use crate::bodies::{Color, RigidBody};
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Wall response for particles: softer than rigid bodies, with friction
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ParticleBoundary {
    /// Fraction of the normal velocity kept (and reversed) on wall contact
    pub bounce: f32,

    /// Extra factor on x velocity when hitting a side wall
    pub wall_friction: f32,

    /// Factor on x velocity while touching the floor (`y = height`)
    pub floor_friction: f32,
}

impl Default for ParticleBoundary {
    fn default() -> Self {
        Self {
            bounce: 0.2,
            wall_friction: 0.9,
            floor_friction: 0.95,
        }
    }
}

/// A short-lived circular body that fades out and dies after its lifetime
#[derive(Debug, Clone)]
pub struct Particle {
    body: RigidBody,
    age: f32,
    lifetime: f32,
    fade_factor: f32,
    boundary: ParticleBoundary,
}

impl Particle {
    /// Creates a particle with zero initial acceleration. `lifetime` is in
    /// seconds and must be positive.
    pub fn new(
        center: Vector2,
        radius: f32,
        velocity: Vector2,
        color: Color,
        density: f32,
        lifetime: f32,
    ) -> Result<Self> {
        if !(lifetime.is_finite() && lifetime > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "particle lifetime must be positive, got {}",
                lifetime
            )));
        }

        let body = RigidBody::new_circle(center, radius, velocity, Vector2::ZERO, color, density)?;
        debug!("spawned particle at {} lifetime={}s", center, lifetime);

        Ok(Self {
            body,
            age: 0.0,
            lifetime,
            fade_factor: 0.8,
            boundary: ParticleBoundary::default(),
        })
    }

    pub fn with_fade_factor(mut self, fade_factor: f32) -> Self {
        self.fade_factor = fade_factor;
        self
    }

    pub fn with_boundary(mut self, boundary: ParticleBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn get_body(&self) -> &RigidBody {
        &self.body
    }

    pub fn get_body_mut(&mut self) -> &mut RigidBody {
        &mut self.body
    }

    pub fn get_age(&self) -> f32 {
        self.age
    }

    pub fn get_lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn get_fade_factor(&self) -> f32 {
        self.fade_factor
    }

    pub fn get_boundary(&self) -> ParticleBoundary {
        self.boundary
    }

    /// True once the particle has lived its full lifetime
    pub fn is_dead(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Opacity for rendering, fading linearly from 255 to 0 over the lifetime
    pub fn alpha(&self) -> u8 {
        let remaining = 1.0 - self.age / self.lifetime;
        (255.0 * remaining).clamp(0.0, 255.0) as u8
    }

    /// Body color with the current fade applied
    pub fn faded_color(&self) -> Color {
        self.body.get_color().with_alpha(self.alpha())
    }

    /// Ages the particle, applies its forces (and `gravity`), integrates and
    /// keeps it inside `[0, width] x [0, height]`.
    ///
    /// Unlike rigid bodies all four walls are tested independently, and wall
    /// contacts also bleed off horizontal speed.
    pub fn update(&mut self, dt: f32, gravity: Vector2, bounds_width: f32, bounds_height: f32) {
        self.age += dt;

        self.body.apply_forces_with_gravity(gravity, dt);
        self.body.advance(dt);

        let radius = self.body.get_radius().unwrap_or(0.0);
        let ParticleBoundary {
            bounce,
            wall_friction,
            floor_friction,
        } = self.boundary;

        let mut center = self.body.get_center_of_mass();
        let mut velocity = self.body.get_velocity();

        if center.x - radius < 0.0 {
            center.x = radius;
            velocity.x *= -bounce * wall_friction;
        }
        if center.x + radius > bounds_width {
            center.x = bounds_width - radius;
            velocity.x *= -bounce * wall_friction;
        }
        if center.y - radius < 0.0 {
            center.y = radius;
            velocity.y *= -bounce;
        }
        if center.y + radius > bounds_height {
            center.y = bounds_height - radius;
            velocity.y *= -bounce;
            velocity.x *= floor_friction;
        }

        self.body.set_position(center);
        self.body.set_velocity(velocity);
    }
}
