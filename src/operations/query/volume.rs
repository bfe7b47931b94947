use crate::tessellation::Triangle3;

/// Computes the volume enclosed by a triangle soup.
///
/// Uses the signed tetrahedron method. For each triangle, computes
/// `(1/6) * v0 . (v1 x v2)` and sums over all triangles. The result is only
/// meaningful for closed meshes with consistent winding; the absolute value is
/// returned so either orientation works.
pub struct MeshVolume<'a> {
    triangles: &'a [Triangle3],
}

impl<'a> MeshVolume<'a> {
    /// Creates a new `MeshVolume` query.
    #[must_use]
    pub fn new(triangles: &'a [Triangle3]) -> Self {
        Self { triangles }
    }

    /// Executes the query, returning the volume (absolute value).
    #[must_use]
    pub fn execute(&self) -> f64 {
        let signed_volume: f64 = self
            .triangles
            .iter()
            .map(|[v0, v1, v2]| v0.coords.dot(&v1.coords.cross(&v2.coords)))
            .sum();
        signed_volume.abs() / 6.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::{Point3, Vector3};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_tetrahedron() -> Vec<Triangle3> {
        vec![
            [p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 0.0, 0.0)],
            [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 0.0, 1.0)],
            [p(0.0, 0.0, 0.0), p(0.0, 0.0, 1.0), p(0.0, 1.0, 0.0)],
            [p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0)],
        ]
    }

    #[test]
    fn tetrahedron_volume() {
        let volume = MeshVolume::new(&unit_tetrahedron()).execute();
        assert!(volume > 0.166_666_6 && volume < 0.166_666_7, "got {volume}");
    }

    #[test]
    fn translated_tetrahedron_volume() {
        let shift = Vector3::new(12.0, -7.5, 3.0);
        let moved: Vec<Triangle3> = unit_tetrahedron()
            .iter()
            .map(|tri| tri.map(|v| v + shift))
            .collect();
        assert_abs_diff_eq!(MeshVolume::new(&moved).execute(), 1.0 / 6.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_mesh_has_no_volume() {
        assert_abs_diff_eq!(MeshVolume::new(&[]).execute(), 0.0);
    }
}
