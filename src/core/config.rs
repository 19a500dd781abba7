use crate::bodies::ParticleBoundary;
use crate::collision::ContactParams;
use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for the physics simulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Shared gravitational acceleration, read at every force pass.
    /// Screen coordinates: positive `y` pulls toward the bottom.
    pub gravity: Vector2,

    /// Density given to bodies built through the world's shape builders
    pub default_density: f32,

    /// Impulse and positional-correction constants
    pub contact: ContactParams,

    /// Spawning and wall behavior of timed particles
    pub particles: ParticleConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: Vector2::new(0.0, 1000.0),
            default_density: 7050.0,
            contact: ContactParams::default(),
            particles: ParticleConfig::default(),
        }
    }
}

/// Parameters for spawned liquid particles
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ParticleConfig {
    pub density: f32,

    /// Fade factor handed to renderers
    pub fade_factor: f32,

    /// Radius is drawn uniformly from `[min, max)`
    pub radius_range: (f32, f32),

    /// Lifetime in seconds is drawn uniformly from `[min, max)`
    pub lifetime_range: (f32, f32),

    /// Each velocity component is drawn from `[-spread, spread)`
    pub velocity_spread: f32,

    /// Added to the sampled y velocity
    pub velocity_bias_y: f32,

    pub boundary: ParticleBoundary,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            density: 0.8,
            fade_factor: 0.8,
            radius_range: (2.0, 4.0),
            lifetime_range: (3.0, 7.0),
            velocity_spread: 30.0,
            velocity_bias_y: 30.0,
            boundary: ParticleBoundary::default(),
        }
    }
}
