use crate::config::EngineParams;
use crate::math::{snap_to_grid, Point2};
use crate::model::{Element, WallElement};

/// Grid snapping plus endpoint welding for drawn and dragged points.
///
/// A candidate is first rounded to the grid, then replaced verbatim by the
/// nearest existing wall endpoint within the snap threshold, so the graph
/// builder always welds the two into a single node.
#[derive(Debug, Clone, Copy)]
pub struct EndpointSnapper {
    grid_size: f64,
    threshold: f64,
}

impl EndpointSnapper {
    /// Creates a snapper from the grid size and snap threshold in `params`.
    #[must_use]
    pub fn new(params: &EngineParams) -> Self {
        Self {
            grid_size: params.grid_size,
            threshold: params.endpoint_snap_threshold,
        }
    }

    /// Snaps `raw` against every wall in `elements`.
    #[must_use]
    pub fn snap(&self, raw: &Point2, elements: &[Element]) -> Point2 {
        self.snap_filtered(raw, elements, |_| true)
    }

    /// Snaps `raw` ignoring the endpoints of the wall `exclude_wall_id`,
    /// so a dragged endpoint never welds onto its own wall.
    #[must_use]
    pub fn snap_excluding(&self, raw: &Point2, elements: &[Element], exclude_wall_id: &str) -> Point2 {
        self.snap_filtered(raw, elements, |w| w.id != exclude_wall_id)
    }

    /// Returns the wall endpoint strictly closer than the threshold to
    /// `point`. Ties keep the first endpoint encountered.
    #[must_use]
    pub fn nearest_endpoint<'a>(
        &self,
        point: &Point2,
        walls: impl IntoIterator<Item = &'a WallElement>,
    ) -> Option<Point2> {
        let mut best = None;
        let mut best_distance = self.threshold;
        for wall in walls {
            for candidate in [wall.start_point(), wall.end_point()] {
                let d = (candidate - point).norm();
                if d < best_distance {
                    best_distance = d;
                    best = Some(candidate);
                }
            }
        }
        best
    }

    fn snap_filtered(
        &self,
        raw: &Point2,
        elements: &[Element],
        keep: impl Fn(&WallElement) -> bool,
    ) -> Point2 {
        let snapped = snap_to_grid(raw, self.grid_size);
        let walls = elements.iter().filter_map(Element::as_wall).filter(|w| keep(w));
        self.nearest_endpoint(&snapped, walls).unwrap_or(snapped)
    }
}

impl Default for EndpointSnapper {
    fn default() -> Self {
        Self::new(&EngineParams::default())
    }
}
