use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Parameters controlling snapping, hit-testing, placement and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineParams {
    /// Grid spacing every drawn or dragged point snaps to.
    pub grid_size: f64,
    /// Radius within which a new endpoint welds onto an existing one.
    pub endpoint_snap_threshold: f64,
    /// Minimum half-width of a wall's selection zone.
    pub min_hit_threshold: f64,
    /// Extra radius added to `width / 2` when hit-testing openings.
    pub opening_hit_padding: f64,
    /// Maximum pointer-to-wall distance for attaching an opening.
    pub placement_max_distance: f64,
    /// Lower zoom bound.
    pub min_zoom: f64,
    /// Upper zoom bound.
    pub max_zoom: f64,
    /// Multiplicative zoom factor for one zoom step.
    pub zoom_step: f64,
    /// Thickness given to newly drawn walls.
    pub default_wall_thickness: f64,
    /// Height given to newly drawn walls.
    pub default_wall_height: f64,
    /// Width given to newly placed openings.
    pub default_opening_width: f64,
    /// Height given to newly placed openings.
    pub default_opening_height: f64,
    /// Door box depth as a multiple of the parent wall thickness.
    pub door_depth_factor: f64,
    /// Window box depth as a multiple of the parent wall thickness.
    pub window_depth_factor: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            grid_size: 20.0,
            endpoint_snap_threshold: 15.0,
            min_hit_threshold: 10.0,
            opening_hit_padding: 5.0,
            placement_max_distance: 50.0,
            min_zoom: 0.1,
            max_zoom: 10.0,
            zoom_step: 1.1,
            default_wall_thickness: 10.0,
            default_wall_height: 200.0,
            default_opening_width: 80.0,
            default_opening_height: 200.0,
            door_depth_factor: 1.5,
            window_depth_factor: 1.2,
        }
    }
}

impl EngineParams {
    /// Parses parameters from camelCase JSON and validates them. Missing
    /// fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error from
    /// [`EngineParams::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Checks that every length and factor is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] naming the first offending
    /// field, or `min_zoom` when it exceeds `max_zoom`.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("grid_size", self.grid_size),
            ("endpoint_snap_threshold", self.endpoint_snap_threshold),
            ("min_hit_threshold", self.min_hit_threshold),
            ("opening_hit_padding", self.opening_hit_padding),
            ("placement_max_distance", self.placement_max_distance),
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
            ("zoom_step", self.zoom_step),
            ("default_wall_thickness", self.default_wall_thickness),
            ("default_wall_height", self.default_wall_height),
            ("default_opening_width", self.default_opening_width),
            ("default_opening_height", self.default_opening_height),
            ("door_depth_factor", self.door_depth_factor),
            ("window_depth_factor", self.window_depth_factor),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidParameter { name, value }.into());
            }
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvalidParameter {
                name: "min_zoom",
                value: self.min_zoom,
            }
            .into());
        }
        Ok(())
    }
}
