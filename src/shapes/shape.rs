use crate::math::{Aabb, Vector2};
use crate::shapes::{Circle, Polygon};

/// Shape kind tag, for renderers and dispatch tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Polygon,
}

/// Geometry of a body, in absolute world coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Vertex list for rendering. A circle yields its center as the only vertex.
    pub fn get_vertices(&self) -> &[Vector2] {
        match self {
            Shape::Circle(circle) => circle.get_vertices(),
            Shape::Polygon(polygon) => polygon.get_vertices(),
        }
    }

    pub fn area(&self) -> f32 {
        match self {
            Shape::Circle(circle) => circle.area(),
            Shape::Polygon(polygon) => polygon.area(),
        }
    }

    /// Geometric centroid; `None` for a polygon with zero signed area
    pub fn centroid(&self) -> Option<Vector2> {
        match self {
            Shape::Circle(circle) => Some(circle.get_center()),
            Shape::Polygon(polygon) => polygon.centroid(),
        }
    }

    pub fn aabb(&self) -> Aabb {
        match self {
            Shape::Circle(circle) => circle.aabb(),
            Shape::Polygon(polygon) => polygon.aabb(),
        }
    }

    /// Moves every vertex (or the circle center) by `offset`
    pub fn translate(&mut self, offset: Vector2) {
        match self {
            Shape::Circle(circle) => circle.translate(offset),
            Shape::Polygon(polygon) => polygon.translate(offset),
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}
