pub mod config;
pub mod error;
pub mod interaction;
pub mod math;
pub mod model;
pub mod operations;
pub mod scene;
pub mod tessellation;
pub mod topology;

pub use config::EngineParams;
pub use error::{FloorplanError, Result};
pub use model::{Element, Floorplan, OpeningElement, OpeningKind, Point, WallElement};
pub use scene::Scene;
