mod preprocess;
mod triangulate_object;
mod triangulate_polygon;

pub use preprocess::preprocess_ring;
pub use triangulate_object::TriangulateObject;
pub use triangulate_polygon::TriangulatePolygon;

use crate::math::Point3;

/// One mesh face. Winding is whatever the triangulation produced.
pub type Triangle3 = [Point3; 3];
