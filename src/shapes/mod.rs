mod shape;
mod circle;
mod polygon;

pub use self::shape::{Shape, ShapeKind};
pub use self::circle::Circle;
pub use self::polygon::{centroid_of, signed_area_of, Polygon};
