use std::collections::HashMap;

use tracing::{debug, instrument, trace};

use crate::math::{perpendicular, quantize, Point2, TOLERANCE};
use crate::operations::SharedCorners;
use crate::topology::{EdgeId, WallGraph};

use super::{plan_to_world, TriangleMesh};

/// Scale applied before rounding mesh vertex coordinates (2 decimal places).
pub const VERTEX_WELD_SCALE: f64 = 100.0;

/// Extrudes every wall of a graph into one vertex-shared triangle mesh.
///
/// Each wall runs between the shared corners of its two nodes and becomes
/// an 8-vertex box from elevation `0` to its height. Vertices are welded
/// across the whole mesh, so adjoining walls share their corner vertices.
#[derive(Debug)]
pub struct TessellateWalls<'a> {
    graph: &'a WallGraph,
    corners: &'a SharedCorners,
}

impl<'a> TessellateWalls<'a> {
    /// Creates a new wall tessellation.
    #[must_use]
    pub fn new(graph: &'a WallGraph, corners: &'a SharedCorners) -> Self {
        Self { graph, corners }
    }

    /// Executes the tessellation.
    ///
    /// Walls are visited in wall-id order so identical input always yields
    /// identical buffers. Walls with no extent after mitering are skipped.
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(edges = self.graph.edge_count()))]
    pub fn execute(&self) -> TriangleMesh {
        let mut builder = MeshBuilder::default();

        for edge_id in self.graph.edges_by_wall_id() {
            self.extrude_edge(edge_id, &mut builder);
        }

        let mut mesh = builder.finish();
        mesh.compute_normals();
        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "wall mesh built"
        );
        mesh
    }

    fn extrude_edge(&self, edge_id: EdgeId, builder: &mut MeshBuilder) {
        let (Some(edge), Some((start_node, end_node))) =
            (self.graph.edge(edge_id), self.graph.edge_endpoints(edge_id))
        else {
            return;
        };
        if (end_node.position - start_node.position).norm() < TOLERANCE {
            trace!(wall = %edge.wall_id, "skipping zero-length wall");
            return;
        }

        let start = self.corners.get_or(&start_node.key, start_node.position);
        let end = self.corners.get_or(&end_node.key, end_node.position);
        let v = end - start;
        let length = v.norm();
        if length < TOLERANCE {
            trace!(wall = %edge.wall_id, "skipping wall collapsed by mitering");
            return;
        }

        let perp = perpendicular(&(v / length)) * (edge.thickness / 2.0);
        let start_l = start - perp;
        let start_r = start + perp;
        let end_l = end - perp;
        let end_r = end + perp;
        let h = edge.height;

        let sbl = builder.vertex(&start_l, 0.0);
        let sbr = builder.vertex(&start_r, 0.0);
        let ebr = builder.vertex(&end_r, 0.0);
        let ebl = builder.vertex(&end_l, 0.0);
        let stl = builder.vertex(&start_l, h);
        let stp_r = builder.vertex(&start_r, h);
        let etr = builder.vertex(&end_r, h);
        let etl = builder.vertex(&end_l, h);

        // Outward winding in the Y-up frame; `l` lies on the -perp side.
        builder.triangles(&[
            // Bottom (-Y)
            [sbl, ebl, ebr],
            [sbl, ebr, sbr],
            // Top (+Y)
            [stl, stp_r, etr],
            [stl, etr, etl],
            // Left side
            [sbl, stl, etl],
            [sbl, etl, ebl],
            // Right side
            [sbr, ebr, etr],
            [sbr, etr, stp_r],
            // Start cap
            [sbl, sbr, stp_r],
            [sbl, stp_r, stl],
            // End cap
            [ebl, etl, etr],
            [ebl, etr, ebr],
        ]);
    }
}

/// Growing vertex/index buffers with position welding.
#[derive(Default)]
struct MeshBuilder {
    mesh: TriangleMesh,
    welded: HashMap<(i64, i64, i64), u32>,
}

impl MeshBuilder {
    /// Returns the index of the vertex at plan point `p` and `elevation`,
    /// reusing an existing vertex whose rounded coordinates match.
    #[allow(clippy::cast_possible_truncation)]
    fn vertex(&mut self, p: &Point2, elevation: f64) -> u32 {
        let key = (
            quantize(p.x, VERTEX_WELD_SCALE),
            quantize(p.y, VERTEX_WELD_SCALE),
            quantize(elevation, VERTEX_WELD_SCALE),
        );
        let next = self.mesh.vertices.len() as u32;
        *self.welded.entry(key).or_insert_with(|| {
            self.mesh.vertices.push(plan_to_world(p, elevation));
            next
        })
    }

    fn triangles(&mut self, tris: &[[u32; 3]]) {
        self.mesh.indices.extend_from_slice(tris);
    }

    fn finish(self) -> TriangleMesh {
        self.mesh
    }
}
