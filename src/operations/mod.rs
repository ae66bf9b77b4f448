pub mod build_graph;
pub mod locate_on_wall;
pub mod place_opening;
pub mod resolve_corners;

pub use build_graph::BuildWallGraph;
pub use locate_on_wall::{LocateOnWall, WallHit};
pub use place_opening::{OpeningPlacement, PlaceOpening};
pub use resolve_corners::{shared_corner, ResolveCorners, SharedCorners};
