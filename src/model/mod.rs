pub mod demo;
pub mod document;
pub mod element;
pub mod point;

pub use document::{Floorplan, FORMAT_VERSION};
pub use element::{Element, OpeningElement, OpeningKind, WallElement};
pub use point::Point;
