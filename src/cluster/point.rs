//! Identified points in the plane.

/// A 2D point carrying a caller-chosen identifier.
///
/// The identifier takes no part in geometry: [`distance`] only reads `x` and `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<Id> {
    /// Identifier used as the key of the resulting label map.
    pub id: Id,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl<Id> Point<Id> {
    /// Create a point.
    pub fn new(id: Id, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Euclidean distance between the coordinates of two points.
#[inline]
pub fn distance<A, B>(a: &Point<A>, b: &Point<B>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Indices of every point within `eps` of `points[point_idx]`, in input order.
///
/// The comparison is inclusive, so the reference point is part of its own
/// neighborhood whenever `eps >= 0`.
pub fn region_query<Id>(points: &[Point<Id>], point_idx: usize, eps: f64) -> Vec<usize> {
    let point = &points[point_idx];
    points
        .iter()
        .enumerate()
        .filter(|(_, other)| distance(point, other) <= eps)
        .map(|(idx, _)| idx)
        .collect()
}
