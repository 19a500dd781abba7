use crate::bodies::RigidBody;
use crate::collision::{sat, CollisionInfo};
use crate::shapes::{Circle, Polygon, Shape};

/// Tests two bodies for overlap, dispatching on their shape kinds.
///
/// Normal conventions:
/// - circle vs circle: from `a`'s center toward `b`'s center
/// - polygon vs polygon: from `a` toward `b`
/// - circle vs polygon: from the circle center toward the closest boundary point
/// - polygon vs circle: the circle vs polygon result with the normal reversed
pub fn detect_collision(a: &RigidBody, b: &RigidBody) -> CollisionInfo {
    match (a.get_shape(), b.get_shape()) {
        (Shape::Circle(circle_a), Shape::Circle(circle_b)) => circle_vs_circle(circle_a, circle_b),
        (Shape::Polygon(poly_a), Shape::Polygon(poly_b)) => {
            sat::polygon_vs_polygon(poly_a, a.get_center_of_mass(), poly_b, b.get_center_of_mass())
        }
        (Shape::Circle(circle), Shape::Polygon(poly)) => circle_vs_polygon(circle, poly),
        (Shape::Polygon(poly), Shape::Circle(circle)) => {
            let info = circle_vs_polygon(circle, poly);
            if info.has_collision {
                info.flipped()
            } else {
                info
            }
        }
    }
}

/// Overlap iff the center distance is below the sum of the radii.
///
/// Coincident centers give a zero normal, since normalizing a zero vector
/// yields zero.
pub fn circle_vs_circle(a: &Circle, b: &Circle) -> CollisionInfo {
    let delta = b.get_center() - a.get_center();
    let distance = delta.length();
    let sum_radii = a.get_radius() + b.get_radius();

    if distance >= sum_radii {
        return CollisionInfo::none();
    }

    let normal = delta.normalize();
    CollisionInfo::hit(
        normal,
        a.get_center() + normal * a.get_radius(),
        sum_radii - distance,
    )
}

/// Overlap iff the polygon boundary passes within the radius of the circle
/// center. The contact point is the closest boundary point.
pub fn circle_vs_polygon(circle: &Circle, poly: &Polygon) -> CollisionInfo {
    let closest = poly.closest_boundary_point(circle.get_center());
    let delta = closest - circle.get_center();
    let distance = delta.length();

    if distance >= circle.get_radius() {
        return CollisionInfo::none();
    }

    CollisionInfo::hit(delta.normalize(), closest, circle.get_radius() - distance)
}
