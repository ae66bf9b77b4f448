use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::math::{Point2, Vector2};

use super::point::Point;

/// A straight wall segment drawn by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct WallElement {
    pub id: String,
    pub start: Point,
    pub end: Point,
    /// Full wall thickness, strictly positive.
    pub thickness: f64,
    /// Extrusion height, strictly positive.
    pub height: f64,
}

impl WallElement {
    /// Creates a wall from two sketch-plane points.
    #[must_use]
    pub fn new(id: impl Into<String>, start: Point2, end: Point2, thickness: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            start: start.into(),
            end: end.into(),
            thickness,
            height,
        }
    }

    /// Start point in the sketch plane.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.start.to_point2()
    }

    /// End point in the sketch plane.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.end.to_point2()
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end_point() - self.start_point()
    }

    /// Centerline length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    fn validate(&self) -> Result<(), DocumentError> {
        if !(self.start.is_finite() && self.end.is_finite()) {
            return Err(invalid(&self.id, "endpoint coordinates must be finite"));
        }
        check_positive(&self.id, "thickness", self.thickness)?;
        check_positive(&self.id, "height", self.height)
    }
}

/// Distinguishes doors from windows; both attach to walls the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpeningKind {
    Door,
    Window,
}

/// A door or window placed parametrically along its parent wall.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningElement {
    pub id: String,
    pub kind: OpeningKind,
    /// Id of the wall this opening sits in. May dangle after a delete.
    pub parent_wall_id: String,
    /// Offset from the wall start (0) to its end (1). Clamped at use.
    pub position_on_wall: f64,
    pub width: f64,
    pub height: f64,
}

impl OpeningElement {
    /// Position along the parent wall, clamped to `[0, 1]`.
    #[must_use]
    pub fn clamped_position(&self) -> f64 {
        self.position_on_wall.clamp(0.0, 1.0)
    }

    fn validate(&self) -> Result<(), DocumentError> {
        if !self.position_on_wall.is_finite() {
            return Err(invalid(&self.id, "positionOnWall must be finite"));
        }
        check_positive(&self.id, "width", self.width)?;
        check_positive(&self.id, "height", self.height)
    }
}

/// One entry of the floorplan's element collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ElementRecord", into = "ElementRecord")]
pub enum Element {
    Wall(WallElement),
    Opening(OpeningElement),
}

impl Element {
    /// The element's unique id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Wall(w) => &w.id,
            Self::Opening(o) => &o.id,
        }
    }

    /// Returns the wall, if this element is one.
    #[must_use]
    pub fn as_wall(&self) -> Option<&WallElement> {
        match self {
            Self::Wall(w) => Some(w),
            Self::Opening(_) => None,
        }
    }

    /// Returns the door or window, if this element is one.
    #[must_use]
    pub fn as_opening(&self) -> Option<&OpeningElement> {
        match self {
            Self::Opening(o) => Some(o),
            Self::Wall(_) => None,
        }
    }

    /// Checks the dimensional invariants of the element.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidElement`] for non-finite coordinates or
    /// a non-positive thickness, width or height.
    pub fn validate(&self) -> Result<(), DocumentError> {
        match self {
            Self::Wall(w) => w.validate(),
            Self::Opening(o) => o.validate(),
        }
    }
}

impl From<WallElement> for Element {
    fn from(w: WallElement) -> Self {
        Self::Wall(w)
    }
}

impl From<OpeningElement> for Element {
    fn from(o: OpeningElement) -> Self {
        Self::Opening(o)
    }
}

// --- Wire format ---

/// Tagged on-disk representation of an element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum ElementRecord {
    Wall(WallRecord),
    Door(OpeningRecord),
    Window(OpeningRecord),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct WallRecord {
    id: String,
    start: Point,
    end: Point,
    thickness: f64,
    height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OpeningRecord {
    id: String,
    parent_wall_id: String,
    position_on_wall: f64,
    width: f64,
    height: f64,
}

impl TryFrom<ElementRecord> for Element {
    type Error = DocumentError;

    fn try_from(record: ElementRecord) -> Result<Self, Self::Error> {
        let element = match record {
            ElementRecord::Wall(w) => Self::Wall(WallElement {
                id: w.id,
                start: w.start,
                end: w.end,
                thickness: w.thickness,
                height: w.height,
            }),
            ElementRecord::Door(o) => Self::Opening(o.into_opening(OpeningKind::Door)),
            ElementRecord::Window(o) => Self::Opening(o.into_opening(OpeningKind::Window)),
        };
        element.validate()?;
        Ok(element)
    }
}

impl From<Element> for ElementRecord {
    fn from(element: Element) -> Self {
        match element {
            Element::Wall(w) => Self::Wall(WallRecord {
                id: w.id,
                start: w.start,
                end: w.end,
                thickness: w.thickness,
                height: w.height,
            }),
            Element::Opening(o) => {
                let kind = o.kind;
                let record = OpeningRecord {
                    id: o.id,
                    parent_wall_id: o.parent_wall_id,
                    position_on_wall: o.position_on_wall,
                    width: o.width,
                    height: o.height,
                };
                match kind {
                    OpeningKind::Door => Self::Door(record),
                    OpeningKind::Window => Self::Window(record),
                }
            }
        }
    }
}

impl OpeningRecord {
    fn into_opening(self, kind: OpeningKind) -> OpeningElement {
        OpeningElement {
            id: self.id,
            kind,
            parent_wall_id: self.parent_wall_id,
            position_on_wall: self.position_on_wall,
            width: self.width,
            height: self.height,
        }
    }
}

fn check_positive(id: &str, field: &str, value: f64) -> Result<(), DocumentError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(id, &format!("{field} must be positive, got {value}")))
    }
}

fn invalid(id: &str, reason: &str) -> DocumentError {
    DocumentError::InvalidElement {
        id: id.to_owned(),
        reason: reason.to_owned(),
    }
}
