use tracing::trace;

use crate::config::EngineParams;
use crate::math::Point2;
use crate::model::{Element, OpeningElement, OpeningKind, WallElement};
use crate::operations::{LocateOnWall, WallHit};

use super::snap::EndpointSnapper;

/// Press-drag-release state for drawing a new wall.
///
/// Every point passes through the [`EndpointSnapper`] before it is used.
#[derive(Debug, Clone)]
pub struct WallDrawTool {
    snapper: EndpointSnapper,
    thickness: f64,
    height: f64,
    start: Option<Point2>,
}

impl WallDrawTool {
    /// Creates an idle tool drawing walls of the default size.
    #[must_use]
    pub fn new(params: &EngineParams) -> Self {
        Self {
            snapper: EndpointSnapper::new(params),
            thickness: params.default_wall_thickness,
            height: params.default_wall_height,
            start: None,
        }
    }

    /// Whether a wall has been started.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.start.is_some()
    }

    /// Starts a wall at the snapped `raw` point and returns that point.
    pub fn begin(&mut self, raw: &Point2, elements: &[Element]) -> Point2 {
        let start = self.snapper.snap(raw, elements);
        self.start = Some(start);
        start
    }

    /// The segment that would be committed if the pointer were released at `raw`.
    #[must_use]
    pub fn preview(&self, raw: &Point2, elements: &[Element]) -> Option<(Point2, Point2)> {
        self.start.map(|start| (start, self.snapper.snap(raw, elements)))
    }

    /// Ends the gesture and returns the new wall.
    ///
    /// Returns `None` when nothing was started or when the snapped end
    /// coincides with the start, so zero-length walls are never created.
    pub fn finish(&mut self, raw: &Point2, elements: &[Element], id: impl Into<String>) -> Option<WallElement> {
        let start = self.start.take()?;
        let end = self.snapper.snap(raw, elements);
        if start == end {
            trace!("wall draw ended on its start point");
            return None;
        }
        Some(WallElement::new(id, start, end, self.thickness, self.height))
    }

    /// Abandons the current gesture.
    pub fn cancel(&mut self) {
        self.start = None;
    }
}

/// Which end of a wall is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallEnd {
    Start,
    End,
}

/// Returns `wall` with one endpoint replaced by `point`.
///
/// Callers snap `point` with [`EndpointSnapper::snap_excluding`] first.
#[must_use]
pub fn drag_wall_endpoint(wall: &WallElement, which: WallEnd, point: Point2) -> WallElement {
    let mut moved = wall.clone();
    match which {
        WallEnd::Start => moved.start = point.into(),
        WallEnd::End => moved.end = point.into(),
    }
    moved
}

/// Creates and moves openings by projecting the pointer onto the nearest wall.
#[derive(Debug, Clone, Copy)]
pub struct OpeningDrag {
    params: EngineParams,
}

impl OpeningDrag {
    /// Creates a drag helper using `params` for reach and default sizes.
    #[must_use]
    pub fn new(params: EngineParams) -> Self {
        Self { params }
    }

    /// A new opening of default size attached where `point` projects onto
    /// the nearest wall, or `None` if no wall is within reach.
    #[must_use]
    pub fn new_opening(
        &self,
        kind: OpeningKind,
        id: impl Into<String>,
        point: Point2,
        elements: &[Element],
    ) -> Option<OpeningElement> {
        let hit = self.locate(point, elements)?;
        Some(OpeningElement {
            id: id.into(),
            kind,
            parent_wall_id: hit.wall_id,
            position_on_wall: hit.t,
            width: self.params.default_opening_width,
            height: self.params.default_opening_height,
        })
    }

    /// `opening` moved to where `point` projects, possibly onto another wall.
    ///
    /// Returns `None` when no wall is within reach; the caller keeps the
    /// opening where it was.
    #[must_use]
    pub fn reposition(&self, opening: &OpeningElement, point: Point2, elements: &[Element]) -> Option<OpeningElement> {
        let hit = self.locate(point, elements)?;
        if hit.wall_id != opening.parent_wall_id {
            trace!(opening = %opening.id, from = %opening.parent_wall_id, to = %hit.wall_id, "opening re-parented");
        }
        Some(OpeningElement {
            parent_wall_id: hit.wall_id,
            position_on_wall: hit.t,
            ..opening.clone()
        })
    }

    fn locate(&self, point: Point2, elements: &[Element]) -> Option<WallHit> {
        LocateOnWall::new(point, self.params.placement_max_distance).execute(elements)
    }
}
