use super::node::NodeId;

slotmap::new_key_type! {
    /// Unique identifier for a wall edge in the wall graph.
    pub struct EdgeId;
}

/// Graph representation of one wall.
///
/// An edge connects two junction nodes and carries the wall's cross-section.
#[derive(Debug, Clone)]
pub struct WallEdge {
    /// Id of the source wall element.
    pub wall_id: String,
    /// Start junction.
    pub start: NodeId,
    /// End junction.
    pub end: NodeId,
    /// Full wall thickness.
    pub thickness: f64,
    /// Extrusion height.
    pub height: f64,
    /// Index of the source element in the collection the graph was built from.
    pub source_index: usize,
}

impl WallEdge {
    /// Returns the endpoint opposite to `node`.
    ///
    /// For a loop edge (both ends on one node) this is `node` itself.
    #[must_use]
    pub fn other_end(&self, node: NodeId) -> NodeId {
        if self.start == node {
            self.end
        } else {
            self.start
        }
    }

    /// Whether both ends weld to the same node.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }
}
