use super::{Point2, PARALLEL_EPSILON};

/// Intersects the infinite line through `a1`,`a2` with the one through `b1`,`b2`.
///
/// Returns `None` when the lines are parallel (determinant below
/// [`PARALLEL_EPSILON`]) or when either pair of points coincides.
#[must_use]
pub fn line_line_intersect_2d(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> Option<Point2> {
    let da = a2 - a1;
    let db = b2 - b1;
    let det = da.x * db.y - da.y * db.x;
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = ((b1.x - a1.x) * db.y - (b1.y - a1.y) * db.x) / det;
    Some(a1 + da * t)
}
