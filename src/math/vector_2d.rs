use super::{Point2, Vector2};

/// Rounds each coordinate of `point` to the nearest multiple of `grid_size`.
///
/// A non-positive or non-finite grid size leaves the point untouched.
#[must_use]
pub fn snap_to_grid(point: &Point2, grid_size: f64) -> Point2 {
    if !(grid_size.is_finite() && grid_size > 0.0) {
        return *point;
    }
    Point2::new(
        (point.x / grid_size).round() * grid_size,
        (point.y / grid_size).round() * grid_size,
    )
}

/// Rotates `v` by 90 degrees counter-clockwise: `(x, y) -> (-y, x)`.
#[must_use]
pub fn perpendicular(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Normalizes `v`, returning `None` for a (near) zero vector.
#[must_use]
pub fn try_normalize(v: &Vector2) -> Option<Vector2> {
    let len = v.norm();
    if len < super::TOLERANCE {
        None
    } else {
        Some(v / len)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_nearest_multiple() {
        let p = snap_to_grid(&Point2::new(29.0, -31.0), 20.0);
        assert_eq!(p, Point2::new(20.0, -40.0));
    }

    #[test]
    fn snap_keeps_points_on_grid() {
        let p = snap_to_grid(&Point2::new(40.0, 60.0), 20.0);
        assert_eq!(p, Point2::new(40.0, 60.0));
    }

    #[test]
    fn snap_ignores_invalid_grid() {
        let p = Point2::new(3.3, 4.4);
        assert_eq!(snap_to_grid(&p, 0.0), p);
        assert_eq!(snap_to_grid(&p, f64::NAN), p);
    }

    #[test]
    fn perpendicular_is_ccw_rotation() {
        let v = perpendicular(&Vector2::new(1.0, 0.0));
        assert_eq!(v, Vector2::new(0.0, 1.0));
        let w = perpendicular(&Vector2::new(3.0, 4.0));
        assert!(w.dot(&Vector2::new(3.0, 4.0)).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_vector_is_none() {
        assert!(try_normalize(&Vector2::zeros()).is_none());
        let n = try_normalize(&Vector2::new(0.0, 5.0)).unwrap();
        assert!((n.norm() - 1.0).abs() < 1e-12);
    }
}
