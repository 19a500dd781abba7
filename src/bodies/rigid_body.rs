use log::debug;

use crate::bodies::{body_flags::BodyFlags, Color};
use crate::error::PhysicsError;
use crate::forces::{Force, ForceType};
use crate::integration::{self, symplectic_euler, BoundaryContact, BOUNDARY_BOUNCE};
use crate::math::Vector2;
use crate::shapes::{Circle, Polygon, Shape, ShapeKind};
use crate::Result;

/// A translating rigid body: geometry, kinematic state, derived mass
/// properties and the forces attached to it.
///
/// Bodies never rotate. Geometry is stored in absolute world coordinates and
/// every translation moves the vertices and the center of mass together.
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// World-space geometry
    shape: Shape,

    velocity: Vector2,

    /// Overwritten by every force pass while the body has mass
    acceleration: Vector2,

    density: f32,

    /// Always non-negative
    area: f32,

    /// density * area
    mass: f32,

    center_of_mass: Vector2,

    /// Cosmetic only
    color: Color,

    flags: BodyFlags,

    /// Forces owned by this body, dropped with it
    forces: Vec<Force>,
}

impl RigidBody {
    /// Creates a body from a shape. Rejects densities that are not finite and
    /// positive, and shapes whose mass underflows to zero or overflows to
    /// infinity, so every constructed body has a usable inverse mass.
    pub fn new(
        shape: impl Into<Shape>,
        velocity: Vector2,
        acceleration: Vector2,
        color: Color,
        density: f32,
    ) -> Result<Self> {
        if !(density.is_finite() && density > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "density must be positive, got {}",
                density
            )));
        }
        if !velocity.is_finite() || !acceleration.is_finite() {
            return Err(PhysicsError::InvalidParameter(
                "initial velocity and acceleration must be finite".to_string(),
            ));
        }

        let shape = shape.into();
        let mut body = Self {
            center_of_mass: shape.get_vertices()[0],
            shape,
            velocity,
            acceleration,
            density,
            area: 0.0,
            mass: 0.0,
            color,
            flags: BodyFlags::AFFECTED_BY_GRAVITY | BodyFlags::COLLIDABLE,
            forces: Vec::new(),
        };

        body.update_mass_properties();
        if !body.mass.is_normal() {
            return Err(PhysicsError::InvalidParameter(format!(
                "body mass must be a normal positive number, got {}",
                body.mass
            )));
        }

        debug!(
            "created {:?} body: area={} mass={} com={}",
            body.shape.kind(),
            body.area,
            body.mass,
            body.center_of_mass
        );

        Ok(body)
    }

    /// Creates a circular body
    pub fn new_circle(
        center: Vector2,
        radius: f32,
        velocity: Vector2,
        acceleration: Vector2,
        color: Color,
        density: f32,
    ) -> Result<Self> {
        Self::new(Circle::new(center, radius)?, velocity, acceleration, color, density)
    }

    /// Creates a polygonal body from world-space vertices
    pub fn new_polygon(
        vertices: Vec<Vector2>,
        velocity: Vector2,
        acceleration: Vector2,
        color: Color,
        density: f32,
    ) -> Result<Self> {
        Self::new(Polygon::new(vertices)?, velocity, acceleration, color, density)
    }

    pub fn get_shape(&self) -> &Shape {
        &self.shape
    }

    pub fn get_shape_kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Polygon vertices, or the circle center as a single vertex
    pub fn get_vertices(&self) -> &[Vector2] {
        self.shape.get_vertices()
    }

    /// Radius for circles, `None` for polygons
    pub fn get_radius(&self) -> Option<f32> {
        self.shape.as_circle().map(Circle::get_radius)
    }

    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    pub fn get_acceleration(&self) -> Vector2 {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, acceleration: Vector2) {
        self.acceleration = acceleration;
    }

    pub fn get_density(&self) -> f32 {
        self.density
    }

    pub fn get_area(&self) -> f32 {
        self.area
    }

    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// `1 / mass`, or zero for a massless body so it acts immovable
    pub fn get_inverse_mass(&self) -> f32 {
        if self.mass > 0.0 {
            1.0 / self.mass
        } else {
            0.0
        }
    }

    pub fn get_center_of_mass(&self) -> Vector2 {
        self.center_of_mass
    }

    pub fn get_color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn get_flags(&self) -> BodyFlags {
        self.flags
    }

    pub fn is_affected_by_gravity(&self) -> bool {
        self.flags.contains(BodyFlags::AFFECTED_BY_GRAVITY)
    }

    /// Sets whether the shared world gravity acts on this body
    pub fn set_affected_by_gravity(&mut self, affected: bool) {
        self.flags.set(BodyFlags::AFFECTED_BY_GRAVITY, affected);
    }

    pub fn is_collidable(&self) -> bool {
        self.flags.contains(BodyFlags::COLLIDABLE)
    }

    pub fn set_collidable(&mut self, collidable: bool) {
        self.flags.set(BodyFlags::COLLIDABLE, collidable);
    }

    /// Recomputes area, then center of mass, then mass
    pub fn update_mass_properties(&mut self) {
        self.compute_area();
        self.compute_center_of_mass();
        self.compute_mass();
    }

    /// Shoelace area for polygons, π·r² for circles
    pub fn compute_area(&mut self) -> f32 {
        self.area = self.shape.area();
        self.area
    }

    /// Area-weighted centroid. A polygon whose signed area collapsed to zero
    /// keeps its previous center of mass.
    pub fn compute_center_of_mass(&mut self) {
        if let Some(centroid) = self.shape.centroid() {
            self.center_of_mass = centroid;
        }
    }

    /// mass = density * area
    pub fn compute_mass(&mut self) {
        self.mass = self.density * self.area;
    }

    pub fn get_forces(&self) -> &[Force] {
        &self.forces
    }

    pub fn add_force(&mut self, force: impl Into<Force>) {
        self.forces.push(force.into());
    }

    /// Drops every attached force of the given type and returns how many went
    pub fn remove_forces_by_type(&mut self, force_type: ForceType) -> usize {
        let before = self.forces.len();
        self.forces.retain(|force| force.force_type() != force_type);
        before - self.forces.len()
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
    }

    /// Sum of all attached forces, plus `mass * gravity` when the body
    /// follows shared gravity
    pub fn net_force(&self, gravity: Vector2) -> Vector2 {
        let attached: Vector2 = self.forces.iter().map(|f| f.compute_force(self)).sum();

        if self.is_affected_by_gravity() {
            attached + gravity * self.mass
        } else {
            attached
        }
    }

    /// Evaluates the attached forces and overwrites the acceleration with
    /// `net / mass`. A massless body keeps its current acceleration.
    pub fn apply_forces(&mut self, dt: f32) {
        self.apply_forces_with_gravity(Vector2::ZERO, dt);
    }

    /// Like [`apply_forces`](Self::apply_forces), also adding the shared
    /// world gravity if the body is flagged for it
    pub fn apply_forces_with_gravity(&mut self, gravity: Vector2, _dt: f32) {
        let net = self.net_force(gravity);

        if self.mass > 0.0 {
            self.acceleration = net / self.mass;
        }
    }

    /// Instantaneous velocity change `impulse / mass`
    pub fn apply_impulse(&mut self, impulse: Vector2) {
        self.velocity += impulse * self.get_inverse_mass();
    }

    /// Moves the geometry and the center of mass by `offset`
    pub fn translate(&mut self, offset: Vector2) {
        self.center_of_mass += offset;

        match &mut self.shape {
            Shape::Circle(circle) => circle.set_center(self.center_of_mass),
            Shape::Polygon(polygon) => polygon.translate(offset),
        }
    }

    /// Moves the body so its center of mass lands on `position`
    pub fn set_position(&mut self, position: Vector2) {
        let offset = position - self.center_of_mass;
        self.center_of_mass = position;

        match &mut self.shape {
            Shape::Circle(circle) => circle.set_center(position),
            Shape::Polygon(polygon) => polygon.translate(offset),
        }
    }

    /// Semi-implicit Euler step without any boundary handling
    pub(crate) fn advance(&mut self, dt: f32) {
        let displacement = symplectic_euler::step(&mut self.velocity, self.acceleration, dt);
        self.translate(displacement);
    }

    /// Advances the body by `dt`, then keeps it inside `[0, width] x [0, height]`.
    ///
    /// Circles are clamped by center; polygons are shifted by the exact
    /// overflow of their bounding box. Either way the velocity component of
    /// each wall-hitting axis is reversed and halved.
    pub fn integrate(&mut self, dt: f32, bounds_width: f32, bounds_height: f32) -> BoundaryContact {
        self.advance(dt);

        match &self.shape {
            Shape::Circle(circle) => {
                let radius = circle.get_radius();
                let mut center = self.center_of_mass;
                let contact = integration::confine_circle(
                    &mut center,
                    &mut self.velocity,
                    radius,
                    bounds_width,
                    bounds_height,
                    BOUNDARY_BOUNCE,
                );
                self.set_position(center);
                contact
            }
            Shape::Polygon(polygon) => {
                let (offset, contact) =
                    integration::polygon_overflow(&polygon.aabb(), bounds_width, bounds_height);
                if !contact.is_empty() {
                    self.translate(offset);
                    integration::reflect_velocity(&mut self.velocity, contact, BOUNDARY_BOUNCE);
                }
                contact
            }
        }
    }
}
