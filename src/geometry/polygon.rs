use crate::math::Point3;

/// A planar polygon: one exterior boundary plus zero or more holes.
///
/// Rings are stored as read from the source document; the closing point may
/// or may not repeat the first one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    /// Outer boundary.
    pub exterior: Vec<Point3>,
    /// Hole boundaries, assumed coplanar with the exterior.
    pub interiors: Vec<Vec<Point3>>,
}

impl Polygon {
    /// Creates a polygon from its exterior ring and hole rings.
    #[must_use]
    pub fn new(exterior: Vec<Point3>, interiors: Vec<Vec<Point3>>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Creates a polygon without holes.
    #[must_use]
    pub fn from_exterior(exterior: Vec<Point3>) -> Self {
        Self::new(exterior, Vec::new())
    }
}
