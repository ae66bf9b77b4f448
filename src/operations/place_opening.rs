use crate::config::EngineParams;
use crate::math::{perpendicular, Point2, Vector2};
use crate::model::{Element, OpeningElement, OpeningKind, WallElement};

/// World-space placement of a door or window on its parent wall.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningPlacement {
    pub opening_id: String,
    pub kind: OpeningKind,
    pub wall_id: String,
    /// Clamped position along the wall.
    pub t: f64,
    /// Center of the opening on the wall centerline.
    pub center: Point2,
    /// Wall angle in the sketch plane, `atan2(dy, dx)`.
    pub orientation: f64,
    /// Extent along the wall.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Extent across the wall (parent thickness scaled by a per-kind factor).
    pub depth: f64,
}

impl OpeningPlacement {
    /// Places `opening` on `wall` without checking the parent id.
    #[must_use]
    pub fn on_wall(opening: &OpeningElement, wall: &WallElement, params: &EngineParams) -> Self {
        let t = opening.clamped_position();
        let start = wall.start_point();
        let v = wall.vector();
        let factor = match opening.kind {
            OpeningKind::Door => params.door_depth_factor,
            OpeningKind::Window => params.window_depth_factor,
        };
        Self {
            opening_id: opening.id.clone(),
            kind: opening.kind,
            wall_id: wall.id.clone(),
            t,
            center: start + v * t,
            orientation: v.y.atan2(v.x),
            width: opening.width,
            height: opening.height,
            depth: wall.thickness * factor,
        }
    }

    /// Unit vector along the wall.
    #[must_use]
    pub fn along(&self) -> Vector2 {
        Vector2::new(self.orientation.cos(), self.orientation.sin())
    }

    /// Corners of the rotated `width × depth` footprint, counter-clockwise.
    #[must_use]
    pub fn footprint(&self) -> [Point2; 4] {
        let along = self.along() * (self.width / 2.0);
        let across = perpendicular(&self.along()) * (self.depth / 2.0);
        [
            self.center - along - across,
            self.center + along - across,
            self.center + along + across,
            self.center - along + across,
        ]
    }
}

/// Resolves an opening to its placement on the parent wall.
#[derive(Debug)]
pub struct PlaceOpening<'a> {
    opening: &'a OpeningElement,
    params: EngineParams,
}

impl<'a> PlaceOpening<'a> {
    /// Creates a new placement operation.
    #[must_use]
    pub fn new(opening: &'a OpeningElement, params: EngineParams) -> Self {
        Self { opening, params }
    }

    /// Executes the placement against the current element collection.
    ///
    /// Returns `None` when the parent wall is missing; such openings are
    /// simply not rendered.
    #[must_use]
    pub fn execute(&self, elements: &[Element]) -> Option<OpeningPlacement> {
        let wall = elements
            .iter()
            .filter_map(Element::as_wall)
            .find(|w| w.id == self.opening.parent_wall_id)?;
        Some(OpeningPlacement::on_wall(self.opening, wall, &self.params))
    }
}
