use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// A sketch-plane coordinate as stored in floorplan documents.
///
/// `z` is carried through save/load untouched; the engine only reads `x`/`y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Point {
    /// Creates a planar point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Returns the point as a nalgebra point for geometric work.
    #[must_use]
    pub fn to_point2(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        p.to_point2()
    }
}
