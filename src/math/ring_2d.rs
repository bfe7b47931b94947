use super::Point2;

/// Winding number of `point` with respect to the closed ring `ring`.
///
/// Non-zero => inside, zero => outside. The ring is closed implicitly; a
/// repeated closing point adds a zero-length edge and is harmless.
#[must_use]
pub fn winding_number(point: &Point2, ring: &[Point2]) -> i32 {
    let mut winding = 0;
    for (i, a) in ring.iter().enumerate() {
        let b = &ring[(i + 1) % ring.len()];
        let side = (b.x - a.x) * (point.y - a.y) - (point.x - a.x) * (b.y - a.y);
        if a.y <= point.y {
            if b.y > point.y && side > 0.0 {
                winding += 1;
            }
        } else if b.y <= point.y && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Returns `true` if `point` lies inside `ring` (non-zero winding).
#[must_use]
pub fn ring_contains(ring: &[Point2], point: &Point2) -> bool {
    winding_number(point, ring) != 0
}
