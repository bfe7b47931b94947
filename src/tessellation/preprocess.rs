use std::collections::HashSet;

use crate::math::{Line2D, Point2};

/// Removes repeated points from a projected ring and rejects degenerate rings.
///
/// Points are compared by exact coordinate equality and the first occurrence
/// wins, so the ring order is preserved. This must run on the 2D points:
/// distinct 3D vertices can collapse onto the same 2D point.
///
/// Returns an empty vector when fewer than three unique points remain or when
/// all unique points lie on the line through the first two.
#[must_use]
pub fn preprocess_ring(points: &[Point2]) -> Vec<Point2> {
    let mut seen = HashSet::with_capacity(points.len());
    let mut unique = Vec::with_capacity(points.len());
    for point in points {
        if seen.insert(point_key(point)) {
            unique.push(*point);
        }
    }

    if unique.len() <= 2 {
        return Vec::new();
    }

    let line = Line2D::through(&unique[0], &unique[1]);
    if unique[2..].iter().all(|p| line.is_on(p)) {
        return Vec::new();
    }

    unique
}

/// Hash key matching `==` on coordinates. Adding `0.0` folds `-0.0` into `0.0`.
fn point_key(point: &Point2) -> (u64, u64) {
    ((point.x + 0.0).to_bits(), (point.y + 0.0).to_bits())
}
