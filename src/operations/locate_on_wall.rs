use crate::math::{project_point_to_segment, Point2};
use crate::model::Element;

/// The wall nearest to a query point and where along it the point projects.
#[derive(Debug, Clone, PartialEq)]
pub struct WallHit {
    pub wall_id: String,
    /// Clamped projection parameter, usable as `positionOnWall`.
    pub t: f64,
    /// Closest point on the wall centerline.
    pub closest: Point2,
    /// Distance from the query point to `closest`.
    pub distance: f64,
}

/// Maps a free pointer position to the nearest wall and a position on it.
///
/// This is the inverse of opening placement: its result becomes an
/// opening's `parentWallId` and `positionOnWall`.
#[derive(Debug)]
pub struct LocateOnWall {
    point: Point2,
    max_distance: f64,
}

impl LocateOnWall {
    /// Creates a new query. Walls farther than `max_distance` never match.
    #[must_use]
    pub fn new(point: Point2, max_distance: f64) -> Self {
        Self {
            point,
            max_distance,
        }
    }

    /// Executes the query over the walls in `elements`.
    ///
    /// Ties keep the earlier wall. Returns `None` if no wall is close enough.
    #[must_use]
    pub fn execute(&self, elements: &[Element]) -> Option<WallHit> {
        let mut best: Option<WallHit> = None;
        for wall in elements.iter().filter_map(Element::as_wall) {
            let proj = project_point_to_segment(&self.point, &wall.start_point(), &wall.end_point());
            let distance = proj.distance_to(&self.point);
            if distance > self.max_distance {
                continue;
            }
            if best.as_ref().is_some_and(|b| distance >= b.distance) {
                continue;
            }
            best = Some(WallHit {
                wall_id: wall.id.clone(),
                t: proj.t,
                closest: proj.closest,
                distance,
            });
        }
        best
    }
}
