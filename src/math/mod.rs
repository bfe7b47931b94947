pub mod line_2d;
pub mod ring_2d;

pub use line_2d::Line2D;
pub use ring_2d::{ring_contains, winding_number};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Tolerance for deciding that a projected ring point lies on a line.
pub const COLLINEARITY_TOLERANCE: f64 = 1e-7;
