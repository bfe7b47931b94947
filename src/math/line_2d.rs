use super::{Point2, COLLINEARITY_TOLERANCE};

/// An infinite line `a * x + b * y + c = 0` in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2D {
    a: f64,
    b: f64,
    c: f64,
}

impl Line2D {
    /// Creates the line through two points.
    ///
    /// The points must be distinct; coincident points yield a line with
    /// all-zero coefficients that every point lies on.
    #[must_use]
    pub fn through(p: &Point2, q: &Point2) -> Self {
        let a = p.y - q.y;
        let b = q.x - p.x;
        let c = -a * p.x - b * p.y;
        Self { a, b, c }
    }

    /// Returns the coefficients `(a, b, c)`.
    #[must_use]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Residual of the line equation at `point`.
    #[must_use]
    pub fn evaluate(&self, point: &Point2) -> f64 {
        self.a * point.x + self.b * point.y + self.c
    }

    /// Returns `true` if `point` satisfies the line equation within
    /// [`COLLINEARITY_TOLERANCE`].
    #[must_use]
    pub fn is_on(&self, point: &Point2) -> bool {
        self.is_on_within(point, COLLINEARITY_TOLERANCE)
    }

    /// Returns `true` if `|a * x + b * y + c| < tolerance`.
    #[must_use]
    pub fn is_on_within(&self, point: &Point2, tolerance: f64) -> bool {
        self.evaluate(point).abs() < tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn coefficients_from_two_points() {
        let line = Line2D::through(&p(1.0, 2.0), &p(3.0, 5.0));
        let (a, b, c) = line.coefficients();
        assert!((a + 3.0).abs() < 1e-12);
        assert!((b - 2.0).abs() < 1e-12);
        assert!((c - -1.0).abs() < 1e-12);
    }

    #[test]
    fn defining_points_are_on_line() {
        let a = p(-4.5, 0.25);
        let b = p(10.0, 7.0);
        let line = Line2D::through(&a, &b);
        assert!(line.is_on(&a));
        assert!(line.is_on(&b));
    }

    #[test]
    fn point_on_extension_is_on_line() {
        let line = Line2D::through(&p(0.0, 0.0), &p(1.0, 1.0));
        assert!(line.is_on(&p(42.0, 42.0)));
        assert!(line.is_on(&p(-3.0, -3.0)));
    }

    #[test]
    fn point_off_line() {
        let line = Line2D::through(&p(0.0, 0.0), &p(1.0, 0.0));
        assert!(!line.is_on(&p(0.5, 0.001)));
    }

    #[test]
    fn tolerance_is_strict() {
        let line = Line2D::through(&p(0.0, 0.0), &p(1.0, 0.0));
        // Residual for (x, y) is y here.
        assert!(line.is_on(&p(5.0, 5e-8)));
        assert!(!line.is_on_within(&p(5.0, 0.5), 0.5));
        assert!(line.is_on_within(&p(5.0, 0.4), 0.5));
    }
}
