use crate::config::EngineParams;
use crate::math::{Point2, Vector2};

/// Pan/zoom transform between screen pixels and sketch coordinates.
///
/// `world = (screen - pan) / zoom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub pan: Vector2,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Vector2::zeros(),
            zoom: 1.0,
        }
    }
}

impl Viewport {
    /// Converts a screen position into sketch coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: &Point2) -> Point2 {
        Point2::from((screen.coords - self.pan) / self.zoom)
    }

    /// Converts sketch coordinates into a screen position.
    #[must_use]
    pub fn world_to_screen(&self, world: &Point2) -> Point2 {
        Point2::from(world.coords * self.zoom + self.pan)
    }

    /// Shifts the view by a screen-space delta.
    pub fn pan_by(&mut self, delta: &Vector2) {
        self.pan += delta;
    }

    /// Multiplies the zoom by `factor`, clamped to the configured range,
    /// keeping the world point under `screen` fixed.
    ///
    /// Swapped bounds are reordered and a NaN bound is ignored. A step that
    /// would leave the zoom non-finite or non-positive is dropped.
    pub fn zoom_at(&mut self, screen: &Point2, factor: f64, params: &EngineParams) {
        let bound = |v: f64, open: f64| if v.is_nan() { open } else { v };
        let a = bound(params.min_zoom, 0.0);
        let b = bound(params.max_zoom, f64::INFINITY);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let zoom = (self.zoom * factor).max(lo).min(hi);
        if !(zoom.is_finite() && zoom > 0.0) {
            return;
        }
        let anchor = self.screen_to_world(screen);
        self.zoom = zoom;
        self.pan = screen.coords - anchor.coords * self.zoom;
    }

    /// Zooms in one step around `screen`.
    pub fn zoom_in_at(&mut self, screen: &Point2, params: &EngineParams) {
        self.zoom_at(screen, params.zoom_step, params);
    }

    /// Zooms out one step around `screen`.
    pub fn zoom_out_at(&mut self, screen: &Point2, params: &EngineParams) {
        self.zoom_at(screen, 1.0 / params.zoom_step, params);
    }
}
