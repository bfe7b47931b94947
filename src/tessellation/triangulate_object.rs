use tracing::debug;

use crate::citygml::CityObject;
use crate::error::Result;

use super::{Triangle3, TriangulatePolygon};

/// Triangulates every polygon of a city object.
///
/// Polygons whose exterior ring does not determine a plane are skipped so that
/// one malformed surface does not lose the rest of the object.
pub struct TriangulateObject<'a> {
    object: &'a CityObject,
}

impl<'a> TriangulateObject<'a> {
    /// Creates a new `TriangulateObject` operation.
    #[must_use]
    pub fn new(object: &'a CityObject) -> Self {
        Self { object }
    }

    /// Executes the triangulation, returning all triangles of the object.
    ///
    /// # Errors
    ///
    /// Propagates any polygon error other than a plane-construction failure.
    pub fn execute(&self) -> Result<Vec<Triangle3>> {
        let mut triangles = Vec::new();
        for (index, polygon) in self.object.polygons.iter().enumerate() {
            match TriangulatePolygon::new(polygon).execute() {
                Ok(tris) => triangles.extend(tris),
                Err(e) if e.is_plane_construction() => {
                    debug!(
                        object = self.object.id.as_deref().unwrap_or(&self.object.type_name),
                        polygon = index,
                        "skipping polygon: {e}"
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Ok(triangles)
    }
}
