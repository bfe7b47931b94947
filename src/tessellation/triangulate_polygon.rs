use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};
use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{Plane, Polygon};
use crate::math::{ring_contains, Point2, Point3};

use super::{preprocess_ring, Triangle3};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates a planar polygon with holes into 3D triangles.
///
/// The plane is fitted to the exterior ring only; holes are projected with the
/// same plane and are assumed to be coplanar with the exterior.
pub struct TriangulatePolygon<'a> {
    polygon: &'a Polygon,
}

impl<'a> TriangulatePolygon<'a> {
    /// Creates a new `TriangulatePolygon` operation.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the triangulation.
    ///
    /// A polygon whose exterior degenerates after projection yields no
    /// triangles. Degenerate holes are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::PlaneConstruction`] if no plane can be fitted
    /// to the exterior ring, or [`GeometryError::InvalidRing`] if a projected
    /// point cannot be inserted into the triangulation.
    pub fn execute(&self) -> Result<Vec<Triangle3>> {
        let plane = Plane::fit(&self.polygon.exterior)?;
        let exterior = project_ring(&plane, &self.polygon.exterior);
        if exterior.is_empty() {
            debug!("exterior ring degenerates after projection");
            return Ok(Vec::new());
        }

        let mut holes = Vec::with_capacity(self.polygon.interiors.len());
        for (index, ring) in self.polygon.interiors.iter().enumerate() {
            let hole = project_ring(&plane, ring);
            if hole.is_empty() {
                debug!(hole = index, "dropping degenerate hole");
            } else {
                holes.push(hole);
            }
        }

        let triangles_2d = triangulate_2d(&exterior, &holes)?;
        Ok(triangles_2d
            .iter()
            .map(|tri| tri.map(|p| plane.to_3d(&p)))
            .collect())
    }
}

/// Projects a ring into the plane's 2D parameterization and cleans it up.
fn project_ring(plane: &Plane, ring: &[Point3]) -> Vec<Point2> {
    let projected: Vec<Point2> = ring.iter().map(|p| plane.to_2d(p)).collect();
    preprocess_ring(&projected)
}

/// Constrained Delaunay triangulation of a boundary with holes.
///
/// Returns the triangles whose centroid lies inside the boundary and outside
/// every hole. Coincident boundary and hole edges become a single spade
/// constraint, so faces are classified against the rings themselves.
fn triangulate_2d(boundary: &[Point2], holes: &[Vec<Point2>]) -> Result<Vec<[Point2; 3]>> {
    let mut cdt = Cdt::new();
    add_ring(&mut cdt, boundary)?;
    for hole in holes {
        add_ring(&mut cdt, hole)?;
    }

    let inside = |c: &Point2| {
        ring_contains(boundary, c) && !holes.iter().any(|hole| ring_contains(hole, c))
    };

    Ok(cdt
        .inner_faces()
        .map(|face| {
            face.vertices().map(|v| {
                let pos = v.position();
                Point2::new(pos.x, pos.y)
            })
        })
        .filter(|[a, b, c]| inside(&Point2::from((a.coords + b.coords + c.coords) / 3.0)))
        .collect())
}

/// Inserts a ring's vertices and its closing edges as constraints.
///
/// An edge that would cross an existing constraint (self-intersecting ring,
/// hole overlapping the boundary) is left out; the face test in
/// [`triangulate_2d`] still uses the full rings.
fn add_ring(cdt: &mut Cdt, ring: &[Point2]) -> Result<()> {
    let vertices = ring
        .iter()
        .map(|p| {
            cdt.insert(SpadePoint2::new(p.x, p.y))
                .map_err(|e: InsertionError| GeometryError::InvalidRing(format!("CDT insert: {e}")))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let edges = vertices.iter().zip(vertices.iter().cycle().skip(1));
    for (index, (&from, &to)) in edges.enumerate() {
        if from == to {
            continue;
        }
        if cdt.can_add_constraint(from, to) {
            cdt.add_constraint(from, to);
        } else {
            debug!(edge = index, "skipping constraint edge crossing an existing one");
        }
    }
    Ok(())
}
