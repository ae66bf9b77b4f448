pub mod edge;
pub mod node;

pub use edge::{EdgeId, WallEdge};
pub use node::{NodeId, NodeKey, WallNode, NODE_WELD_SCALE};

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::math::{Point2, Vector2};

/// Arena that owns the junctions and wall edges of one floorplan snapshot.
///
/// Nodes and edges reference each other through typed ids (generational
/// indices), so the graph holds no reference cycles. A graph is built fresh
/// for every rebuild and never patched incrementally.
#[derive(Debug, Default, Clone)]
pub struct WallGraph {
    nodes: SlotMap<NodeId, WallNode>,
    edges: SlotMap<EdgeId, WallEdge>,
    keys: HashMap<NodeKey, NodeId>,
    walls: HashMap<String, EdgeId>,
}

impl WallGraph {
    /// Creates a new, empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Node operations ---

    /// Returns the node whose key matches `position`, inserting one if needed.
    pub fn weld_node(&mut self, position: Point2) -> NodeId {
        let key = NodeKey::from_point(&position);
        if let Some(&id) = self.keys.get(&key) {
            return id;
        }
        let id = self.nodes.insert(WallNode::new(position));
        self.keys.insert(key, id);
        id
    }

    /// Returns the node with `id`, if present.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&WallNode> {
        self.nodes.get(id)
    }

    /// Looks up a node by weld key.
    #[must_use]
    pub fn node_id(&self, key: &NodeKey) -> Option<NodeId> {
        self.keys.get(key).copied()
    }

    /// Looks up the node an endpoint at `p` would weld to.
    #[must_use]
    pub fn node_at(&self, p: &Point2) -> Option<NodeId> {
        self.node_id(&NodeKey::from_point(p))
    }

    /// Iterates nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &WallNode)> {
        self.nodes.iter()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // --- Edge operations ---

    /// Inserts an edge and registers it on both endpoint nodes.
    ///
    /// Edges whose endpoints are not in this graph are ignored and `None`
    /// is returned.
    pub fn add_edge(&mut self, edge: WallEdge) -> Option<EdgeId> {
        if !(self.nodes.contains_key(edge.start) && self.nodes.contains_key(edge.end)) {
            return None;
        }
        let (start, end) = (edge.start, edge.end);
        let wall_id = edge.wall_id.clone();
        let id = self.edges.insert(edge);
        for node in [start, end] {
            if let Some(n) = self.nodes.get_mut(node) {
                n.incident_edges.push(id);
            }
        }
        self.walls.entry(wall_id).or_insert(id);
        Some(id)
    }

    /// Returns the edge with `id`, if present.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&WallEdge> {
        self.edges.get(id)
    }

    /// Looks up the edge built from the wall element with `wall_id`.
    #[must_use]
    pub fn edge_for_wall(&self, wall_id: &str) -> Option<EdgeId> {
        self.walls.get(wall_id).copied()
    }

    /// Iterates edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &WallEdge)> {
        self.edges.iter()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge ids sorted by wall id, ties kept in insertion order.
    #[must_use]
    pub fn edges_by_wall_id(&self) -> Vec<EdgeId> {
        let mut ids: Vec<(EdgeId, &str)> = self
            .edges
            .iter()
            .map(|(id, e)| (id, e.wall_id.as_str()))
            .collect();
        ids.sort_by(|a, b| a.1.cmp(b.1));
        ids.into_iter().map(|(id, _)| id).collect()
    }

    // --- Queries ---

    /// Incident edges of `node`, empty for an unknown id.
    #[must_use]
    pub fn incident_edges(&self, node: NodeId) -> &[EdgeId] {
        self.nodes
            .get(node)
            .map_or(&[][..], |n| n.incident_edges.as_slice())
    }

    /// Vector from `node` to the far end of `edge`.
    ///
    /// Returns `None` if either id is unknown. The vector is zero for
    /// loop edges and for walls whose raw ends coincide.
    #[must_use]
    pub fn vector_away(&self, edge: EdgeId, node: NodeId) -> Option<Vector2> {
        let e = self.edges.get(edge)?;
        let here = self.nodes.get(node)?;
        let there = self.nodes.get(e.other_end(node))?;
        Some(there.position - here.position)
    }

    /// Raw positions of the endpoints of `edge`.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(&WallNode, &WallNode)> {
        let e = self.edges.get(edge)?;
        Some((self.nodes.get(e.start)?, self.nodes.get(e.end)?))
    }
}
