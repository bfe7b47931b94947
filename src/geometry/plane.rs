use crate::error::{GeometryError, Result};
use crate::math::{Point2, Point3, Vector3};

/// An infinite plane `a * x + b * y + c * z + d = 0`.
///
/// Besides the equation, a plane remembers which axis to drop when mapping
/// points into 2D: the one whose normal component has the greatest magnitude.
/// Solving the plane equation for that axis divides by the largest
/// coefficient, which keeps the back-projection well conditioned.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vector3,
    d: f64,
    longest: usize,
}

impl Plane {
    /// Creates a plane from its normal vector and offset.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::PlaneConstruction`] if the normal is zero.
    pub fn new(normal: Vector3, d: f64) -> Result<Self> {
        if normal == Vector3::zeros() {
            return Err(GeometryError::PlaneConstruction("zero normal vector".into()).into());
        }
        let longest = normal.iamax();
        Ok(Self { normal, d, longest })
    }

    /// Fits a plane through an ordered ring of points.
    ///
    /// Takes the first point `p`, the first later point `q` that differs from
    /// it, and then scans for a point `r` distinct from both whose cross
    /// product `(p - q) x (r - q)` is non-zero. Collinear candidates are
    /// skipped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::PlaneConstruction`] if there are fewer than
    /// three points, fewer than three distinct points, or every distinct point
    /// is collinear with `p` and `q`.
    pub fn fit(points: &[Point3]) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::PlaneConstruction(format!(
                "need at least 3 points, got {}",
                points.len()
            ))
            .into());
        }

        let p = points[0];
        let Some(q_index) = points.iter().position(|q| *q != p) else {
            return Err(GeometryError::PlaneConstruction("all points are identical".into()).into());
        };
        let q = points[q_index];
        let pq = p - q;

        let mut third_seen = false;
        for r in &points[q_index + 1..] {
            if *r == p || *r == q {
                continue;
            }
            third_seen = true;
            let normal = pq.cross(&(r - q));
            if normal != Vector3::zeros() {
                let d = -p.coords.dot(&normal);
                return Self::new(normal, d);
            }
        }

        let reason = if third_seen {
            "all points are collinear"
        } else {
            "only two distinct points"
        };
        Err(GeometryError::PlaneConstruction(reason.into()).into())
    }

    /// Returns the (unnormalized) normal vector `(a, b, c)`.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the offset `d`.
    #[must_use]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Index (0, 1 or 2) of the normal component with the greatest magnitude.
    #[must_use]
    pub fn longest(&self) -> usize {
        self.longest
    }

    /// Residual of the plane equation at `point`.
    #[must_use]
    pub fn evaluate(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) + self.d
    }

    /// The two axes kept by the 2D projection, in ascending order.
    fn kept_axes(&self) -> (usize, usize) {
        match self.longest {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        }
    }

    /// Projects a point into 2D by dropping the [`longest`](Self::longest) axis.
    #[must_use]
    pub fn to_2d(&self, point: &Point3) -> Point2 {
        let (i, j) = self.kept_axes();
        Point2::new(point[i], point[j])
    }

    /// Lifts a 2D point back onto the plane.
    ///
    /// The dropped coordinate is recomputed from the plane equation, so a
    /// point that was projected from off the plane comes back on it.
    #[must_use]
    pub fn to_3d(&self, point: &Point2) -> Point3 {
        let (i, j) = self.kept_axes();
        let l = self.longest;
        let n = &self.normal;

        let mut coords = [0.0; 3];
        coords[i] = point.x;
        coords[j] = point.y;
        coords[l] = -(n[i] * point.x + n[j] * point.y + self.d) / n[l];
        Point3::from(coords)
    }
}
