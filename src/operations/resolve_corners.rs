use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::math::vector_2d::try_normalize;
use crate::math::{line_line_intersect_2d, perpendicular, Point2, Vector2};
use crate::topology::{EdgeId, NodeId, NodeKey, WallGraph, WallNode};

/// Mitered corner position per junction, keyed by node weld key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedCorners {
    corners: BTreeMap<NodeKey, Point2>,
}

impl SharedCorners {
    /// Returns the corner for `key`, if resolved.
    #[must_use]
    pub fn get(&self, key: &NodeKey) -> Option<Point2> {
        self.corners.get(key).copied()
    }

    /// Returns the corner for `key`, or `fallback` when absent.
    #[must_use]
    pub fn get_or(&self, key: &NodeKey, fallback: Point2) -> Point2 {
        self.get(key).unwrap_or(fallback)
    }

    /// Iterates corners ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeKey, &Point2)> {
        self.corners.iter()
    }

    /// Number of resolved corners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    /// Whether no corner was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }
}

/// Computes the shared corner of every junction in a wall graph.
///
/// The shared corner replaces the raw node position as the true endpoint
/// of every incident wall, so walls of different thickness meet without
/// gaps or overlaps.
#[derive(Debug)]
pub struct ResolveCorners<'a> {
    graph: &'a WallGraph,
}

impl<'a> ResolveCorners<'a> {
    /// Creates a new corner-resolve operation over `graph`.
    #[must_use]
    pub fn new(graph: &'a WallGraph) -> Self {
        Self { graph }
    }

    /// Executes the resolve. Every node gets exactly one entry.
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(nodes = self.graph.node_count()))]
    pub fn execute(&self) -> SharedCorners {
        let corners: BTreeMap<NodeKey, Point2> = self
            .graph
            .nodes()
            .map(|(id, node)| (node.key, corner_of(self.graph, id, node)))
            .collect();
        debug!(corners = corners.len(), "shared corners resolved");
        SharedCorners { corners }
    }
}

/// Computes the shared corner of a single node.
///
/// Falls back to the raw node position for unknown ids and for every
/// degenerate configuration.
#[must_use]
pub fn shared_corner(graph: &WallGraph, node: NodeId) -> Option<Point2> {
    graph.node(node).map(|n| corner_of(graph, node, n))
}

fn corner_of(graph: &WallGraph, id: NodeId, node: &WallNode) -> Point2 {
    match node.incident_edges.as_slice() {
        [] => node.position,
        [edge] => open_end(graph, id, node, *edge),
        edges => junction(graph, id, node, edges),
    }
}

/// Dangling tip: pull the end back along the wall by half its thickness.
fn open_end(graph: &WallGraph, id: NodeId, node: &WallNode, edge_id: EdgeId) -> Point2 {
    let Some(edge) = graph.edge(edge_id) else {
        return node.position;
    };
    // Direction from the far end toward this node.
    let Some(dir) = graph
        .vector_away(edge_id, id)
        .and_then(|v| try_normalize(&-v))
    else {
        return node.position;
    };
    node.position - dir * (edge.thickness / 2.0)
}

/// One wall's centerline shifted by half its thickness to the left of the
/// direction pointing away from the junction.
struct OffsetLine {
    origin: Point2,
    dir: Vector2,
}

impl OffsetLine {
    fn through(&self) -> Point2 {
        self.origin + self.dir
    }
}

/// Two or more walls: average of all pairwise offset-line intersections.
///
/// For three or more walls at irregular angles this is an approximation of
/// a true polygon offset; parallel pairs contribute nothing.
fn junction(graph: &WallGraph, id: NodeId, node: &WallNode, edges: &[EdgeId]) -> Point2 {
    // Pair walls in id order so the result does not depend on element order.
    let mut incident: Vec<_> = edges
        .iter()
        .filter_map(|&edge_id| graph.edge(edge_id).map(|edge| (edge_id, edge)))
        .collect();
    incident.sort_by(|(_, a), (_, b)| {
        a.wall_id.cmp(&b.wall_id).then(a.source_index.cmp(&b.source_index))
    });

    let lines: Vec<OffsetLine> = incident
        .into_iter()
        .filter_map(|(edge_id, edge)| {
            let dir = try_normalize(&graph.vector_away(edge_id, id)?)?;
            Some(OffsetLine {
                origin: node.position + perpendicular(&dir) * (edge.thickness / 2.0),
                dir,
            })
        })
        .collect();

    let mut sum = Vector2::zeros();
    let mut count = 0_u32;
    for (i, a) in lines.iter().enumerate() {
        for b in &lines[i + 1..] {
            if let Some(p) = line_line_intersect_2d(&a.origin, &a.through(), &b.origin, &b.through()) {
                sum += p.coords;
                count += 1;
            }
        }
    }

    if count == 0 {
        node.position
    } else {
        Point2::from(sum / f64::from(count))
    }
}
