use super::{Point2, TOLERANCE};

/// Result of projecting a point onto a bounded segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Clamped segment parameter in `[0, 1]`.
    pub t: f64,
    /// The closest point on the segment.
    pub closest: Point2,
}

impl SegmentProjection {
    /// Distance from `point` to the projected closest point.
    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        (point - self.closest).norm()
    }
}

/// Projects `point` onto the segment `a`→`b`, clamping the parameter to `[0, 1]`.
///
/// A zero-length segment projects everything onto `a` with `t = 0`.
#[must_use]
pub fn project_point_to_segment(point: &Point2, a: &Point2, b: &Point2) -> SegmentProjection {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < TOLERANCE * TOLERANCE {
        return SegmentProjection { t: 0.0, closest: *a };
    }

    let t = ((point - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    SegmentProjection {
        t,
        closest: a + d * t,
    }
}

/// Returns the minimum distance from `point` to the segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    project_point_to_segment(point, a, b).distance_to(point)
}

/// Checks whether `point` lies within the hit zone of a wall segment.
///
/// The zone is `max(thickness / 2, min_threshold)` wide on either side, so
/// thick walls get a larger target while thin ones stay selectable.
#[must_use]
pub fn point_near_segment(
    point: &Point2,
    a: &Point2,
    b: &Point2,
    thickness: f64,
    min_threshold: f64,
) -> bool {
    let threshold = (thickness / 2.0).max(min_threshold);
    point_to_segment_dist(point, a, b) <= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn midpoint_projects_to_half() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 4.0);
        let mid = Point2::new(5.0, 2.0);
        let proj = project_point_to_segment(&mid, &a, &b);
        assert!((proj.t - 0.5).abs() < TOL, "t={}", proj.t);
        assert!((proj.closest - mid).norm() < TOL);
    }

    #[test]
    fn beyond_end_clamps_to_one() {
        let proj = project_point_to_segment(
            &Point2::new(15.0, 3.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 0.0),
        );
        assert!((proj.t - 1.0).abs() < TOL);
        assert_eq!(proj.closest, Point2::new(10.0, 0.0));
    }

    #[test]
    fn before_start_clamps_to_zero() {
        let proj = project_point_to_segment(
            &Point2::new(-4.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 0.0),
        );
        assert!(proj.t.abs() < TOL);
        assert_eq!(proj.closest, Point2::new(0.0, 0.0));
    }

    #[test]
    fn zero_length_segment_falls_back_to_start() {
        let a = Point2::new(2.0, 2.0);
        let proj = project_point_to_segment(&Point2::new(5.0, 6.0), &a, &a);
        assert!(proj.t.abs() < TOL);
        assert_eq!(proj.closest, a);
        assert!((proj.distance_to(&Point2::new(5.0, 6.0)) - 5.0).abs() < TOL);
    }

    #[test]
    fn segment_dist_perpendicular_projection() {
        // Point (1, 1) to segment (0,0)→(2,0). Closest at (1,0), dist = 1.
        let d = point_to_segment_dist(
            &Point2::new(1.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn thick_walls_widen_hit_zone() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(100.0, 0.0);
        let p = Point2::new(50.0, 14.0);
        assert!(!point_near_segment(&p, &a, &b, 10.0, 10.0));
        assert!(point_near_segment(&p, &a, &b, 30.0, 10.0));
    }

    #[test]
    fn thin_walls_keep_minimum_zone() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(100.0, 0.0);
        assert!(point_near_segment(&Point2::new(50.0, 9.0), &a, &b, 1.0, 10.0));
        assert!(!point_near_segment(&Point2::new(50.0, 11.0), &a, &b, 1.0, 10.0));
    }
}
