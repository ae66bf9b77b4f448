use std::fmt;

use crate::math::{quantize, Point2};

use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a junction in the wall graph.
    pub struct NodeId;
}

/// Scale applied before rounding node coordinates (3 decimal places).
pub const NODE_WELD_SCALE: f64 = 1000.0;

/// Quantized junction coordinate used to weld coincident wall endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    x: i64,
    y: i64,
}

impl NodeKey {
    /// Derives the weld key for a sketch-plane point.
    #[must_use]
    pub fn from_point(p: &Point2) -> Self {
        Self {
            x: quantize(p.x, NODE_WELD_SCALE),
            y: quantize(p.y, NODE_WELD_SCALE),
        }
    }
}

impl fmt::Display for NodeKey {
    #[allow(clippy::cast_precision_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            self.x as f64 / NODE_WELD_SCALE,
            self.y as f64 / NODE_WELD_SCALE
        )
    }
}

/// A junction where one or more wall endpoints meet.
#[derive(Debug, Clone)]
pub struct WallNode {
    /// The weld key shared by every endpoint merged into this node.
    pub key: NodeKey,
    /// Position of the first endpoint that created the node.
    pub position: Point2,
    /// Incident edges in the order they were added. A zero-length wall
    /// whose ends weld together appears twice.
    pub incident_edges: Vec<EdgeId>,
}

impl WallNode {
    /// Creates an isolated node at `position`.
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self {
            key: NodeKey::from_point(&position),
            position,
            incident_edges: Vec::new(),
        }
    }

    /// Number of incident edge ends.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.incident_edges.len()
    }
}
