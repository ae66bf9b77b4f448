pub mod distance_2d;
pub mod intersect_2d;
pub mod vector_2d;

pub use distance_2d::{point_near_segment, point_to_segment_dist, project_point_to_segment, SegmentProjection};
pub use intersect_2d::line_line_intersect_2d;
pub use vector_2d::{perpendicular, snap_to_grid};

/// 2D point type (sketch plane).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type (Y-up render space).
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Determinant below which two lines are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-8;

/// Rounds `value * scale` to the nearest integer, for tolerance-based keys.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn quantize(value: f64, scale: f64) -> i64 {
    (value * scale).round() as i64
}
