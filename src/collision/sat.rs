use crate::collision::CollisionInfo;
use crate::math::Vector2;
use crate::shapes::Polygon;

/// Overlap of the two polygons' projections on `axis`, or `None` when the
/// axis separates them
pub fn overlap_on_axis(axis: Vector2, a: &Polygon, b: &Polygon) -> Option<f32> {
    let (min_a, max_a) = a.project(axis);
    let (min_b, max_b) = b.project(axis);

    if max_a < min_b || max_b < min_a {
        return None;
    }

    Some((max_a - min_b).min(max_b - min_a))
}

/// Separating Axis Theorem test between two convex polygons.
///
/// Every edge normal of `a`, then of `b`, is tried; the first separating axis
/// ends the search. Otherwise the axis with the smallest overlap becomes the
/// normal, oriented from `center_a` toward `center_b`.
///
/// The contact point is `center_a + normal * depth / 2`, a rough stand-in
/// that only impulse resolution should consume.
pub fn polygon_vs_polygon(
    a: &Polygon,
    center_a: Vector2,
    b: &Polygon,
    center_b: Vector2,
) -> CollisionInfo {
    let mut min_overlap = f32::MAX;
    let mut normal = Vector2::ZERO;

    for axis in a.axes().chain(b.axes()) {
        match overlap_on_axis(axis, a, b) {
            None => return CollisionInfo::none(),
            Some(overlap) if overlap < min_overlap => {
                min_overlap = overlap;
                normal = axis;
            }
            Some(_) => {}
        }
    }

    if (center_b - center_a).dot(&normal) < 0.0 {
        normal = -normal;
    }

    CollisionInfo::hit(normal, center_a + normal * (min_overlap / 2.0), min_overlap)
}
