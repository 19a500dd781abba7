use log::{debug, trace, warn};
use rand::Rng;

use crate::bodies::{Color, Particle, RigidBody};
use crate::collision::{detect_collision, resolve_collision_with};
use crate::core::{BodyHandle, CollisionEvent, SimulationConfig};
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::shapes::{Circle, Polygon, Shape};
use crate::Result;

/// Owns the simulated bodies and runs the per-tick sequence over them.
///
/// Bodies are kept in insertion order; that order fixes the pairwise
/// collision visiting order. World bounds are supplied to every
/// [`step`](Self::step) and never stored.
pub struct PhysicsWorld {
    /// Rigid bodies in insertion order
    bodies: Vec<(BodyHandle, RigidBody)>,

    /// Short-lived particles; they collide with rigid bodies only
    particles: Vec<Particle>,

    config: SimulationConfig,

    /// Collisions found by the most recent step
    events: Vec<CollisionEvent>,

    next_id: u32,

    /// Total simulated time
    time: f32,
}

impl PhysicsWorld {
    /// Creates a new physics world with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a new physics world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            bodies: Vec::new(),
            particles: Vec::new(),
            config,
            events: Vec::new(),
            next_id: 1,
            time: 0.0,
        }
    }

    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn get_config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    pub fn get_gravity(&self) -> Vector2 {
        self.config.gravity
    }

    /// Changes the shared gravity. Takes effect at the next force pass for
    /// every body flagged to follow it; no body is touched here.
    pub fn set_gravity(&mut self, gravity: Vector2) {
        debug!("gravity set to {}", gravity);
        self.config.gravity = gravity;
    }

    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Adds a rigid body and returns its handle
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = BodyHandle(self.next_id);
        self.next_id += 1;
        self.bodies.push((handle, body));
        handle
    }

    /// Axis-aligned rectangle between two drag corners, at the default density
    pub fn create_rectangle(&mut self, start: Vector2, end: Vector2) -> Result<BodyHandle> {
        let polygon = Polygon::rectangle(start, end)?;
        self.add_default_body(polygon.into(), Color::RED)
    }

    /// Triangle inside the box spanned by two drag corners, at the default density
    pub fn create_triangle(&mut self, start: Vector2, end: Vector2) -> Result<BodyHandle> {
        let polygon = Polygon::triangle(start, end)?;
        self.add_default_body(polygon.into(), Color::GREEN)
    }

    /// Circle at the default density
    pub fn create_circle(&mut self, center: Vector2, radius: f32) -> Result<BodyHandle> {
        let circle = Circle::new(center, radius)?;
        self.add_default_body(circle.into(), Color::BLUE)
    }

    fn add_default_body(&mut self, shape: Shape, color: Color) -> Result<BodyHandle> {
        let body = RigidBody::new(
            shape,
            Vector2::ZERO,
            Vector2::ZERO,
            color,
            self.config.default_density,
        )?;
        Ok(self.add_body(body))
    }

    /// Removes a body, keeping the order of the others
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<RigidBody> {
        match self.bodies.iter().position(|(h, _)| *h == handle) {
            Some(index) => Ok(self.bodies.remove(index).1),
            None => {
                warn!("remove_body: no body with handle {}", handle);
                Err(not_found(handle))
            }
        }
    }

    /// Removes the most recently added body still in the world
    pub fn remove_last(&mut self) -> Option<RigidBody> {
        self.bodies.pop().map(|(_, body)| body)
    }

    /// Removes every body and particle
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.particles.clear();
        self.events.clear();
    }

    pub fn get_body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, body)| body)
            .ok_or_else(|| not_found(handle))
    }

    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies
            .iter_mut()
            .find(|(h, _)| *h == handle)
            .map(|(_, body)| body)
            .ok_or_else(|| not_found(handle))
    }

    /// Bodies in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> + '_ {
        self.bodies.iter().map(|(h, body)| (*h, body))
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Spawns `count` liquid particles at `position` with randomized radius,
    /// velocity and lifetime drawn from the particle config.
    ///
    /// The batch is all or nothing: if any particle fails validation none are
    /// added. Returns the number of particles added.
    pub fn spawn_particles<R: Rng + ?Sized>(
        &mut self,
        position: Vector2,
        count: usize,
        rng: &mut R,
    ) -> Result<usize> {
        let cfg = self.config.particles.clone();
        let mut batch = Vec::with_capacity(count);

        for _ in 0..count {
            let radius = sample(rng, cfg.radius_range);
            let lifetime = sample(rng, cfg.lifetime_range);
            let spread = (-cfg.velocity_spread, cfg.velocity_spread);
            let velocity = Vector2::new(
                sample(rng, spread),
                sample(rng, spread) + cfg.velocity_bias_y,
            );

            let particle = Particle::new(position, radius, velocity, Color::WATER, cfg.density, lifetime)?
                .with_fade_factor(cfg.fade_factor)
                .with_boundary(cfg.boundary);
            batch.push(particle);
        }

        let spawned = batch.len();
        self.particles.extend(batch);
        Ok(spawned)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Collisions found by the most recent step, in pair visiting order
    pub fn get_collision_events(&self) -> &[CollisionEvent] {
        &self.events
    }

    /// Advances the simulation by `dt` inside `[0, width] x [0, height]`.
    ///
    /// Rigid bodies go through three passes in a fixed order: forces for
    /// every body, then detection and resolution for every pair `(i, j)`
    /// with `i < j` in ascending order, then integration. Particles are
    /// updated afterward; the ones past their lifetime are dropped and the
    /// survivors are resolved against every rigid body.
    pub fn step(&mut self, dt: f32, bounds_width: f32, bounds_height: f32) {
        self.events.clear();
        let gravity = self.config.gravity;

        for (_, body) in &mut self.bodies {
            body.apply_forces_with_gravity(gravity, dt);
        }

        let count = self.bodies.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (head, tail) = self.bodies.split_at_mut(j);
                let (handle_a, body_a) = &mut head[i];
                let (handle_b, body_b) = &mut tail[0];

                if !body_a.is_collidable() || !body_b.is_collidable() {
                    continue;
                }

                let info = detect_collision(body_a, body_b);
                if !info.has_collision {
                    continue;
                }

                let impulse = resolve_collision_with(body_a, body_b, &info, &self.config.contact);
                debug!(
                    "collision between {} and {}: depth={} normal={}",
                    handle_a, handle_b, info.penetration_depth, info.normal
                );

                self.events.push(CollisionEvent {
                    body_a: *handle_a,
                    body_b: *handle_b,
                    info,
                    impulse,
                });
            }
        }

        for (handle, body) in &mut self.bodies {
            let contact = body.integrate(dt, bounds_width, bounds_height);
            if !contact.is_empty() {
                trace!("body {} hit walls {:?}", handle, contact);
            }
        }

        self.step_particles(dt, gravity, bounds_width, bounds_height);

        self.time += dt;
    }

    fn step_particles(&mut self, dt: f32, gravity: Vector2, bounds_width: f32, bounds_height: f32) {
        for particle in &mut self.particles {
            particle.update(dt, gravity, bounds_width, bounds_height);
        }

        let before = self.particles.len();
        self.particles.retain(|particle| !particle.is_dead());
        let expired = before - self.particles.len();
        if expired > 0 {
            trace!("{} particles expired", expired);
        }

        for particle in &mut self.particles {
            for (_, body) in &mut self.bodies {
                if !body.is_collidable() {
                    continue;
                }

                let info = detect_collision(particle.get_body(), body);
                if info.has_collision {
                    resolve_collision_with(particle.get_body_mut(), body, &info, &self.config.contact);
                }
            }
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(handle: BodyHandle) -> PhysicsError {
    PhysicsError::ResourceNotFound(format!("Body with handle {} not found", handle))
}

/// Uniform sample from `[min, max)`, or `min` for an empty range
fn sample<R: Rng + ?Sized>(rng: &mut R, (min, max): (f32, f32)) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
