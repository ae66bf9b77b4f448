use tracing::{debug, instrument, trace};

use crate::model::Element;
use crate::topology::{WallEdge, WallGraph};

/// Builds the wall graph from a flat element collection.
///
/// Endpoints weld into one node iff their coordinates agree after rounding
/// to three decimals. Openings are ignored. The builder is stateless: every
/// call produces a fresh graph from the full collection.
#[derive(Debug)]
pub struct BuildWallGraph<'a> {
    elements: &'a [Element],
}

impl<'a> BuildWallGraph<'a> {
    /// Creates a new graph-build operation over `elements`.
    #[must_use]
    pub fn new(elements: &'a [Element]) -> Self {
        Self { elements }
    }

    /// Executes the build.
    ///
    /// Zero-length walls are kept as loop edges so later stages see every
    /// wall; they contribute no geometry.
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(elements = self.elements.len()))]
    pub fn execute(&self) -> WallGraph {
        let mut graph = WallGraph::new();

        for (index, wall) in self
            .elements
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_wall().map(|w| (i, w)))
        {
            let start = graph.weld_node(wall.start_point());
            let end = graph.weld_node(wall.end_point());
            if start == end {
                trace!(wall = %wall.id, "zero-length wall welded into a loop edge");
            }
            graph.add_edge(WallEdge {
                wall_id: wall.id.clone(),
                start,
                end,
                thickness: wall.thickness,
                height: wall.height,
                source_index: index,
            });
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "wall graph built"
        );
        graph
    }
}
