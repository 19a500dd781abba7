use crate::error::PhysicsError;
use crate::math::{Aabb, Vector2};
use crate::Result;

/// Signed area of a closed vertex loop (shoelace formula).
///
/// Positive for counter-clockwise winding in a y-up frame, which is clockwise
/// on screen where y grows downward.
pub fn signed_area_of(vertices: &[Vector2]) -> f32 {
    edge_pairs(vertices).map(|(a, b)| a.cross(&b)).sum::<f32>() * 0.5
}

/// Area-weighted centroid of a closed vertex loop.
///
/// Returns `None` when the signed area is zero (collinear or self-cancelling
/// loops), since the centroid is undefined there.
pub fn centroid_of(vertices: &[Vector2]) -> Option<Vector2> {
    let mut weighted = Vector2::ZERO;
    let mut twice_area = 0.0;

    for (a, b) in edge_pairs(vertices) {
        let cross = a.cross(&b);
        twice_area += cross;
        weighted += (a + b) * cross;
    }

    let signed_area = twice_area * 0.5;
    if signed_area == 0.0 {
        return None;
    }

    Some(weighted / (6.0 * signed_area))
}

/// Consecutive vertex pairs, wrapping from the last vertex back to the first
fn edge_pairs(vertices: &[Vector2]) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

/// A convex polygon with absolute world-space vertices.
///
/// The vertex count is fixed at construction; only translation is allowed
/// afterward, so the area never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector2>,
}

impl Polygon {
    /// Creates a polygon from at least three vertices with a consistent winding
    pub fn new(vertices: Vec<Vector2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(PhysicsError::DegenerateShape(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        if let Some(bad) = vertices.iter().find(|v| !v.is_finite()) {
            return Err(PhysicsError::InvalidParameter(format!(
                "polygon vertex must be finite, got {}",
                bad
            )));
        }
        if edge_pairs(&vertices).any(|(a, b)| a == b) {
            return Err(PhysicsError::DegenerateShape(
                "polygon has coincident consecutive vertices".to_string(),
            ));
        }
        if signed_area_of(&vertices) == 0.0 {
            return Err(PhysicsError::DegenerateShape(
                "polygon has zero area".to_string(),
            ));
        }

        Ok(Self { vertices })
    }

    /// Axis-aligned rectangle spanned by two opposite drag corners
    pub fn rectangle(start: Vector2, end: Vector2) -> Result<Self> {
        Self::new(vec![
            start,
            Vector2::new(end.x, start.y),
            end,
            Vector2::new(start.x, end.y),
        ])
    }

    /// Isosceles triangle inside the box spanned by `start` and `end`, apex
    /// centered on the `start.y` edge
    pub fn triangle(start: Vector2, end: Vector2) -> Result<Self> {
        Self::new(vec![
            Vector2::new((start.x + end.x) / 2.0, start.y),
            Vector2::new(start.x, end.y),
            Vector2::new(end.x, end.y),
        ])
    }

    pub fn get_vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn signed_area(&self) -> f32 {
        signed_area_of(&self.vertices)
    }

    /// |signed area|
    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    pub fn centroid(&self) -> Option<Vector2> {
        centroid_of(&self.vertices)
    }

    pub fn aabb(&self) -> Aabb {
        // `new` guarantees at least three vertices
        Aabb::from_points(&self.vertices)
            .unwrap_or_else(|| Aabb::new(Vector2::ZERO, Vector2::ZERO))
    }

    pub fn translate(&mut self, offset: Vector2) {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Edges as `(start, end)` pairs, closing back to the first vertex
    pub fn edges(&self) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
        edge_pairs(&self.vertices)
    }

    /// Unit normals of every edge: the candidate separating axes
    pub fn axes(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.edges().map(|(a, b)| (b - a).perpendicular().normalize())
    }

    /// Interval `(min, max)` covered by the vertices projected onto `axis`
    pub fn project(&self, axis: Vector2) -> (f32, f32) {
        self.vertices
            .iter()
            .map(|v| v.dot(&axis))
            .fold((f32::MAX, f32::MIN), |(min, max), p| (min.min(p), max.max(p)))
    }

    /// Closest point to `point` on the polygon boundary.
    ///
    /// Vertices are checked first, then each edge with the projection clamped
    /// to the segment, so a vertex wins ties.
    pub fn closest_boundary_point(&self, point: Vector2) -> Vector2 {
        let mut closest = self.vertices[0];
        let mut closest_dist_sq = f32::MAX;

        for vertex in &self.vertices {
            let dist_sq = point.distance_squared(vertex);
            if dist_sq < closest_dist_sq {
                closest_dist_sq = dist_sq;
                closest = *vertex;
            }
        }

        for (start, end) in self.edges() {
            let edge = end - start;
            let edge_len_sq = edge.length_squared();
            if edge_len_sq == 0.0 {
                continue;
            }
            let t = ((point - start).dot(&edge) / edge_len_sq).clamp(0.0, 1.0);
            let on_edge = start + edge * t;

            let dist_sq = point.distance_squared(&on_edge);
            if dist_sq < closest_dist_sq {
                closest_dist_sq = dist_sq;
                closest = on_edge;
            }
        }

        closest
    }
}
