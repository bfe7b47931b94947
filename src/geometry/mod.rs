mod plane;
mod polygon;

pub use plane::Plane;
pub use polygon::Polygon;
