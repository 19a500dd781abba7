use planar_physics::{
    bodies::{Color, Particle, ParticleBoundary, RigidBody},
    error::PhysicsError,
    forces::{Drag, Force, ForceType, Gravity, Spring},
    integration::BoundaryContact,
    math::Vector2,
    shapes::{Circle, Polygon, ShapeKind},
};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn unit_square_at(x: f32, y: f32) -> Vec<Vector2> {
    vec![
        Vector2::new(x, y),
        Vector2::new(x + 1.0, y),
        Vector2::new(x + 1.0, y + 1.0),
        Vector2::new(x, y + 1.0),
    ]
}

fn circle_body(center: Vector2, radius: f32, velocity: Vector2) -> RigidBody {
    RigidBody::new_circle(center, radius, velocity, Vector2::ZERO, Color::BLUE, 1.0).unwrap()
}

#[test]
fn test_rigid_body_creation() {
    let body = RigidBody::new_polygon(
        unit_square_at(0.0, 0.0),
        Vector2::ZERO,
        Vector2::ZERO,
        Color::RED,
        2.0,
    )
    .unwrap();

    assert_eq!(body.get_shape_kind(), ShapeKind::Polygon);
    assert_eq!(body.get_vertices().len(), 4);
    assert_relative_eq!(body.get_area(), 1.0);
    assert_relative_eq!(body.get_mass(), 2.0);
    assert_relative_eq!(body.get_inverse_mass(), 0.5);
    assert_relative_eq!(body.get_center_of_mass(), Vector2::new(0.5, 0.5));
    assert!(body.get_radius().is_none());
    assert!(body.is_affected_by_gravity());
    assert!(body.is_collidable());
    assert!(body.get_forces().is_empty());
}

#[test]
fn test_circle_body_mass_properties() {
    let body = circle_body(Vector2::new(3.0, 4.0), 2.0, Vector2::ZERO);

    assert_eq!(body.get_shape_kind(), ShapeKind::Circle);
    assert_eq!(body.get_vertices(), &[Vector2::new(3.0, 4.0)]);
    assert_eq!(body.get_radius(), Some(2.0));
    assert_relative_eq!(body.get_area(), std::f32::consts::PI * 4.0);
    assert_relative_eq!(body.get_mass(), body.get_area());
    assert_eq!(body.get_center_of_mass(), Vector2::new(3.0, 4.0));
}

#[test]
fn test_compute_mass_properties_idempotent() {
    let mut body = RigidBody::new_polygon(
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(4.0, 2.0),
            Vector2::new(0.0, 2.0),
        ],
        Vector2::ZERO,
        Vector2::ZERO,
        Color::WHITE,
        3.0,
    )
    .unwrap();

    let area = body.get_area();
    let mass = body.get_mass();
    let com = body.get_center_of_mass();

    assert_eq!(body.compute_area(), area);
    body.compute_center_of_mass();
    body.compute_mass();
    body.update_mass_properties();

    assert_eq!(body.get_area(), area);
    assert_eq!(body.get_mass(), mass);
    assert_eq!(body.get_center_of_mass(), com);
    assert_relative_eq!(body.get_mass(), body.get_density() * body.get_area());
}

#[test]
fn test_clockwise_polygon_has_positive_area() {
    let mut vertices = unit_square_at(2.0, 2.0);
    vertices.reverse();
    let body = RigidBody::new_polygon(vertices, Vector2::ZERO, Vector2::ZERO, Color::RED, 1.0).unwrap();

    assert!(body.get_area() > 0.0);
    assert_relative_eq!(body.get_center_of_mass(), Vector2::new(2.5, 2.5));
}

#[test]
fn test_degenerate_bodies_rejected() {
    let collinear = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(2.0, 2.0),
    ];
    assert!(matches!(
        RigidBody::new_polygon(collinear, Vector2::ZERO, Vector2::ZERO, Color::RED, 1.0),
        Err(PhysicsError::DegenerateShape(_))
    ));

    let two = vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)];
    assert!(matches!(Polygon::new(two), Err(PhysicsError::DegenerateShape(_))));

    assert!(matches!(
        Circle::new(Vector2::ZERO, 0.0),
        Err(PhysicsError::InvalidParameter(_))
    ));
    assert!(Circle::new(Vector2::ZERO, -1.0).is_err());
    assert!(Circle::new(Vector2::new(f32::NAN, 0.0), 1.0).is_err());

    for density in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        assert!(matches!(
            RigidBody::new_circle(Vector2::ZERO, 1.0, Vector2::ZERO, Vector2::ZERO, Color::BLUE, density),
            Err(PhysicsError::InvalidParameter(_))
        ));
    }
}

#[test]
fn test_mass_outside_normal_range_rejected() {
    // Mass underflows to a subnormal value
    assert!(matches!(
        RigidBody::new_circle(Vector2::ZERO, 1.0, Vector2::ZERO, Vector2::ZERO, Color::BLUE, 1e-40),
        Err(PhysicsError::InvalidParameter(_))
    ));

    // Area is finite but mass overflows to infinity
    assert!(matches!(
        RigidBody::new_circle(Vector2::ZERO, 1e18, Vector2::ZERO, Vector2::ZERO, Color::BLUE, 7050.0),
        Err(PhysicsError::InvalidParameter(_))
    ));

    let body = RigidBody::new_circle(Vector2::ZERO, 1.0, Vector2::ZERO, Vector2::ZERO, Color::BLUE, 1e-3).unwrap();
    assert!(body.get_inverse_mass().is_finite());
}

#[test]
fn test_coincident_vertices_rejected() {
    let repeated = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(2.0, 0.0),
        Vector2::new(2.0, 0.0),
        Vector2::new(2.0, 2.0),
        Vector2::new(0.0, 2.0),
    ];
    assert!(matches!(
        Polygon::new(repeated.clone()),
        Err(PhysicsError::DegenerateShape(_))
    ));
    assert!(matches!(
        RigidBody::new_polygon(repeated, Vector2::ZERO, Vector2::ZERO, Color::RED, 1.0),
        Err(PhysicsError::DegenerateShape(_))
    ));

    // Closing vertex repeats the first one
    let closed = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(2.0, 0.0),
        Vector2::new(2.0, 2.0),
        Vector2::new(0.0, 0.0),
    ];
    assert!(matches!(Polygon::new(closed), Err(PhysicsError::DegenerateShape(_))));
}

#[test]
fn test_rectangle_and_triangle_builders() {
    let rect = Polygon::rectangle(Vector2::new(10.0, 10.0), Vector2::new(30.0, 20.0)).unwrap();
    assert_relative_eq!(rect.area(), 200.0);
    assert_relative_eq!(rect.centroid().unwrap(), Vector2::new(20.0, 15.0));

    let tri = Polygon::triangle(Vector2::new(0.0, 0.0), Vector2::new(4.0, 6.0)).unwrap();
    assert_eq!(tri.get_vertices()[0], Vector2::new(2.0, 0.0));
    assert_relative_eq!(tri.area(), 12.0);

    // Zero-width drag
    assert!(Polygon::rectangle(Vector2::new(5.0, 5.0), Vector2::new(5.0, 9.0)).is_err());
}

#[test]
fn test_apply_forces_overwrites_acceleration() {
    let mut body = RigidBody::new_polygon(
        unit_square_at(0.0, 0.0),
        Vector2::new(4.0, 0.0),
        Vector2::new(100.0, 100.0),
        Color::RED,
        2.0,
    )
    .unwrap();

    // No forces: acceleration becomes zero, not the stale value
    body.apply_forces(0.1);
    assert_eq!(body.get_acceleration(), Vector2::ZERO);

    body.add_force(Force::gravity(0.0, 9.8));
    body.add_force(Drag::new(0.5));
    body.apply_forces(0.1);

    // (m*g - k*v) / m with m = 2
    assert_relative_eq!(body.get_acceleration(), Vector2::new(-1.0, 9.8));

    // Applying twice does not accumulate
    body.apply_forces(0.1);
    assert_relative_eq!(body.get_acceleration(), Vector2::new(-1.0, 9.8));
}

#[test]
fn test_shared_gravity_follows_flag() {
    let mut body = circle_body(Vector2::new(10.0, 10.0), 1.0, Vector2::ZERO);
    let g = Vector2::new(0.0, 1000.0);

    body.apply_forces_with_gravity(g, 0.016);
    assert_abs_diff_eq!(body.get_acceleration(), g, epsilon = 1e-3);

    body.set_affected_by_gravity(false);
    body.apply_forces_with_gravity(g, 0.016);
    assert_eq!(body.get_acceleration(), Vector2::ZERO);

    // Attached gravity stacks on shared gravity
    body.set_affected_by_gravity(true);
    body.add_force(Gravity::new(5.0, 0.0));
    body.apply_forces_with_gravity(g, 0.016);
    assert_abs_diff_eq!(body.get_acceleration(), Vector2::new(5.0, 1000.0), epsilon = 1e-3);
}

#[test]
fn test_remove_forces_by_type() {
    let mut body = circle_body(Vector2::new(10.0, 10.0), 1.0, Vector2::ZERO);
    body.add_force(Force::gravity(0.0, 9.8));
    body.add_force(Force::drag(0.1));
    body.add_force(Force::gravity(1.0, 0.0));
    body.add_force(Force::spring(Vector2::ZERO, 2.0, 1.0));

    assert_eq!(body.remove_forces_by_type(ForceType::Gravity), 2);
    assert_eq!(body.get_forces().len(), 2);
    assert!(body.get_forces().iter().all(|f| f.force_type() != ForceType::Gravity));

    assert_eq!(body.remove_forces_by_type(ForceType::Custom), 0);
    assert_eq!(body.get_forces().len(), 2);

    body.clear_forces();
    assert!(body.get_forces().is_empty());
}

fn pull_left(body: &planar_physics::RigidBody) -> Vector2 {
    Vector2::new(-body.get_mass(), 0.0)
}

#[test]
fn test_custom_force() {
    let mut body = circle_body(Vector2::new(10.0, 10.0), 1.0, Vector2::ZERO);
    body.add_force(Force::custom(pull_left));
    assert_eq!(body.get_forces()[0].force_type(), ForceType::Custom);

    body.apply_forces(0.016);
    assert_relative_eq!(body.get_acceleration(), Vector2::new(-1.0, 0.0));
}

#[test]
fn test_spring_and_drag_forces() {
    let spring = Spring::new(Vector2::ZERO, 10.0, 2.0);

    // Stretched by 3 along +x: pulled back toward the anchor
    assert_relative_eq!(spring.compute(Vector2::new(5.0, 0.0), Vector2::ZERO), Vector2::new(-30.0, 0.0));
    // Compressed by 1: pushed away
    assert_relative_eq!(spring.compute(Vector2::new(0.0, 1.0), Vector2::ZERO), Vector2::new(0.0, 10.0));
    // On the anchor: no direction, no force
    assert_eq!(spring.compute(Vector2::ZERO, Vector2::new(1.0, 1.0)), Vector2::ZERO);

    let damped = spring.with_damping(2.0);
    assert_relative_eq!(
        damped.compute(Vector2::new(2.0, 0.0), Vector2::new(3.0, 7.0)),
        Vector2::new(-6.0, 0.0)
    );

    let drag = Drag::new(0.5);
    assert_relative_eq!(drag.compute(Vector2::new(4.0, -2.0)), Vector2::new(-2.0, 1.0));
    assert_eq!(Drag::new(-1.0).get_coefficient(), 0.0);
}

#[test]
fn test_apply_impulse_scales_by_inverse_mass() {
    let mut body = RigidBody::new_polygon(
        unit_square_at(0.0, 0.0),
        Vector2::ZERO,
        Vector2::ZERO,
        Color::RED,
        4.0,
    )
    .unwrap();

    body.apply_impulse(Vector2::new(8.0, -4.0));
    assert_relative_eq!(body.get_velocity(), Vector2::new(2.0, -1.0));
}

#[test]
fn test_translate_moves_geometry_and_center() {
    let mut body = RigidBody::new_polygon(
        unit_square_at(0.0, 0.0),
        Vector2::ZERO,
        Vector2::ZERO,
        Color::RED,
        1.0,
    )
    .unwrap();

    body.translate(Vector2::new(2.0, 3.0));
    assert_relative_eq!(body.get_center_of_mass(), Vector2::new(2.5, 3.5));
    assert_eq!(body.get_vertices()[0], Vector2::new(2.0, 3.0));
    assert_relative_eq!(body.get_area(), 1.0);

    let mut circle = circle_body(Vector2::new(1.0, 1.0), 0.5, Vector2::ZERO);
    circle.set_position(Vector2::new(7.0, 8.0));
    assert_eq!(circle.get_center_of_mass(), Vector2::new(7.0, 8.0));
    assert_eq!(circle.get_vertices()[0], Vector2::new(7.0, 8.0));
}

#[test]
fn test_semi_implicit_euler_step() {
    let mut body = RigidBody::new_circle(
        Vector2::new(50.0, 50.0),
        1.0,
        Vector2::new(1.0, 0.0),
        Vector2::new(0.0, 10.0),
        Color::BLUE,
        1.0,
    )
    .unwrap();

    let contact = body.integrate(0.5, 100.0, 100.0);
    assert!(contact.is_empty());

    // Velocity updated first, then the new velocity moves the body
    assert_relative_eq!(body.get_velocity(), Vector2::new(1.0, 5.0));
    assert_relative_eq!(body.get_center_of_mass(), Vector2::new(50.5, 52.5));
}

#[test]
fn test_circle_bounces_off_floor() {
    let mut body = RigidBody::new_circle(
        Vector2::new(50.0, 95.0),
        10.0,
        Vector2::new(2.0, 20.0),
        Vector2::ZERO,
        Color::BLUE,
        1.0,
    )
    .unwrap();

    let contact = body.integrate(0.1, 100.0, 100.0);
    assert_eq!(contact, BoundaryContact::BOTTOM);
    assert_eq!(body.get_center_of_mass().y, 90.0);
    assert_relative_eq!(body.get_velocity(), Vector2::new(2.0, -10.0));
}

#[test]
fn test_polygon_shifted_by_overflow() {
    let mut body = RigidBody::new_polygon(
        unit_square_at(-0.5, 5.0),
        Vector2::new(-4.0, 2.0),
        Vector2::ZERO,
        Color::RED,
        1.0,
    )
    .unwrap();

    // Moves to x in [-0.9, 0.1]; shifted back by 0.9
    let contact = body.integrate(0.1, 10.0, 10.0);
    assert_eq!(contact, BoundaryContact::LEFT);

    let bounds = body.get_shape().aabb();
    assert_abs_diff_eq!(bounds.min.x, 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(bounds.width(), 1.0, epsilon = 1e-5);
    assert_relative_eq!(body.get_velocity(), Vector2::new(2.0, 2.0));
    assert_abs_diff_eq!(body.get_center_of_mass().x, 0.5, epsilon = 1e-5);
}

#[test]
fn test_circle_bounces_out_of_corner() {
    let mut body = RigidBody::new_circle(
        Vector2::new(5.0, 95.0),
        10.0,
        Vector2::new(-20.0, 20.0),
        Vector2::ZERO,
        Color::BLUE,
        1.0,
    )
    .unwrap();

    // Moves to (3, 97): past the left wall and the floor at once
    let contact = body.integrate(0.1, 100.0, 100.0);
    assert_eq!(contact, BoundaryContact::LEFT | BoundaryContact::BOTTOM);
    assert_eq!(body.get_center_of_mass(), Vector2::new(10.0, 90.0));
    assert_relative_eq!(body.get_velocity(), Vector2::new(10.0, -10.0));
}

#[test]
fn test_polygon_pushed_out_of_corner() {
    let mut body = RigidBody::new_polygon(
        unit_square_at(-0.5, 9.5),
        Vector2::new(-4.0, 2.0),
        Vector2::ZERO,
        Color::RED,
        1.0,
    )
    .unwrap();

    // Moves to [-0.9, 0.1] x [9.7, 10.7]; shifted by (0.9, -0.7)
    let contact = body.integrate(0.1, 10.0, 10.0);
    assert_eq!(contact, BoundaryContact::LEFT | BoundaryContact::BOTTOM);

    let bounds = body.get_shape().aabb();
    assert_abs_diff_eq!(bounds.min.x, 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(bounds.max.y, 10.0, epsilon = 1e-5);
    assert_abs_diff_eq!(bounds.width(), 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(bounds.height(), 1.0, epsilon = 1e-5);
    assert_relative_eq!(body.get_velocity(), Vector2::new(2.0, -1.0));
    assert_abs_diff_eq!(body.get_center_of_mass(), Vector2::new(0.5, 9.5), epsilon = 1e-5);
}

#[test]
fn test_falling_circle_stays_in_bounds() {
    let (width, height) = (800.0, 600.0);
    let radius = 15.0;
    let mut body = circle_body(Vector2::new(400.0, 100.0), radius, Vector2::new(250.0, 0.0));
    let gravity = Vector2::new(0.0, 1000.0);

    for _ in 0..2000 {
        body.apply_forces_with_gravity(gravity, 1.0 / 60.0);
        body.integrate(1.0 / 60.0, width, height);

        let c = body.get_center_of_mass();
        assert!(c.x >= radius && c.x <= width - radius, "x out of bounds: {}", c);
        assert!(c.y >= radius && c.y <= height - radius, "y out of bounds: {}", c);
    }
}

#[test]
fn test_random_circles_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let (width, height) = (320.0, 240.0);

    for _ in 0..50 {
        let radius = rng.gen_range(1.0..20.0);
        let center = Vector2::new(rng.gen_range(-50.0..370.0), rng.gen_range(-50.0..290.0));
        let velocity = Vector2::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0));
        let mut body = circle_body(center, radius, velocity);

        for _ in 0..100 {
            body.apply_forces_with_gravity(Vector2::new(0.0, 1000.0), 0.02);
            body.integrate(0.02, width, height);

            let c = body.get_center_of_mass();
            assert!(c.x >= radius && c.x <= width - radius);
            assert!(c.y >= radius && c.y <= height - radius);
        }
    }
}

#[test]
fn test_particle_lifetime_and_alpha() {
    let mut particle = Particle::new(
        Vector2::new(50.0, 50.0),
        2.0,
        Vector2::ZERO,
        Color::WATER,
        0.8,
        1.0,
    )
    .unwrap();

    assert_eq!(particle.alpha(), 255);
    assert!(!particle.is_dead());

    particle.update(0.5, Vector2::ZERO, 100.0, 100.0);
    assert_relative_eq!(particle.get_age(), 0.5);
    assert_eq!(particle.alpha(), 127);
    assert_eq!(particle.faded_color(), Color::WATER.with_alpha(127));

    particle.update(0.5, Vector2::ZERO, 100.0, 100.0);
    assert!(particle.is_dead());
    assert_eq!(particle.alpha(), 0);

    assert!(Particle::new(Vector2::ZERO, 2.0, Vector2::ZERO, Color::WATER, 0.8, 0.0).is_err());
}

#[test]
fn test_particle_floor_friction() {
    let mut particle = Particle::new(
        Vector2::new(50.0, 97.0),
        2.0,
        Vector2::new(10.0, 50.0),
        Color::WATER,
        0.8,
        5.0,
    )
    .unwrap()
    .with_boundary(ParticleBoundary::default());

    particle.update(0.1, Vector2::ZERO, 100.0, 100.0);

    let body = particle.get_body();
    assert_eq!(body.get_center_of_mass().y, 98.0);
    assert_relative_eq!(body.get_velocity(), Vector2::new(9.5, -10.0));
}
