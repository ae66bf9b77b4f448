//! Pointer-driven editing geometry: snapping, selection, drawing and
//! the screen/world transform.

pub mod draw;
pub mod hit_test;
pub mod snap;
pub mod viewport;

pub use draw::{drag_wall_endpoint, OpeningDrag, WallDrawTool, WallEnd};
pub use hit_test::HitTest;
pub use snap::EndpointSnapper;
pub use viewport::Viewport;
