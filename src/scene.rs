//! One full rebuild of everything the 2D and 3D views draw.

use tracing::{debug, instrument};

use crate::config::EngineParams;
use crate::math::Point2;
use crate::model::{Element, OpeningKind};
use crate::operations::{BuildWallGraph, OpeningPlacement, PlaceOpening, ResolveCorners, SharedCorners};
use crate::tessellation::{OpeningSolid, TessellateWalls, TriangleMesh};
use crate::topology::WallGraph;

/// A wall centerline to be stroked at its thickness.
#[derive(Debug, Clone, PartialEq)]
pub struct WallStroke {
    pub wall_id: String,
    pub start: Point2,
    pub end: Point2,
    pub thickness: f64,
}

/// A placed opening as a filled rectangle in the sketch plane.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningFootprint {
    pub opening_id: String,
    pub kind: OpeningKind,
    pub center: Point2,
    /// Wall angle in radians.
    pub angle: f64,
    /// Rectangle corners, counter-clockwise.
    pub corners: [Point2; 4],
}

impl From<&OpeningPlacement> for OpeningFootprint {
    fn from(placement: &OpeningPlacement) -> Self {
        Self {
            opening_id: placement.opening_id.clone(),
            kind: placement.kind,
            center: placement.center,
            angle: placement.orientation,
            corners: placement.footprint(),
        }
    }
}

/// Derived geometry for one snapshot of the element collection.
///
/// Nothing here is kept between rebuilds; dropping a `Scene` and building
/// a new one from the same elements gives an identical value.
#[derive(Debug, Clone)]
pub struct Scene {
    pub graph: WallGraph,
    pub corners: SharedCorners,
    pub wall_mesh: TriangleMesh,
    pub wall_strokes: Vec<WallStroke>,
    pub opening_footprints: Vec<OpeningFootprint>,
    pub opening_solids: Vec<OpeningSolid>,
    /// All opening boxes merged into one mesh.
    pub opening_mesh: TriangleMesh,
    /// Openings whose parent wall does not exist.
    pub orphaned_openings: Vec<String>,
}

impl Scene {
    /// Runs graph → corners → wall mesh and resolves every opening.
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(elements = elements.len()))]
    pub fn build(elements: &[Element], params: &EngineParams) -> Self {
        let graph = BuildWallGraph::new(elements).execute();
        let corners = ResolveCorners::new(&graph).execute();
        let wall_mesh = TessellateWalls::new(&graph, &corners).execute();

        let wall_strokes = elements
            .iter()
            .filter_map(Element::as_wall)
            .map(|w| WallStroke {
                wall_id: w.id.clone(),
                start: w.start_point(),
                end: w.end_point(),
                thickness: w.thickness,
            })
            .collect();

        let mut opening_footprints = Vec::new();
        let mut opening_solids = Vec::new();
        let mut opening_mesh = TriangleMesh::default();
        let mut orphaned_openings = Vec::new();
        for opening in elements.iter().filter_map(Element::as_opening) {
            let Some(placement) = PlaceOpening::new(opening, *params).execute(elements) else {
                debug!(opening = %opening.id, parent = %opening.parent_wall_id, "skipping orphaned opening");
                orphaned_openings.push(opening.id.clone());
                continue;
            };
            let solid = OpeningSolid::from_placement(&placement);
            opening_mesh.merge(&solid.to_mesh());
            opening_footprints.push(OpeningFootprint::from(&placement));
            opening_solids.push(solid);
        }

        debug!(
            walls = graph.edge_count(),
            openings = opening_solids.len(),
            orphaned = orphaned_openings.len(),
            "scene rebuilt"
        );

        Self {
            graph,
            corners,
            wall_mesh,
            wall_strokes,
            opening_footprints,
            opening_solids,
            opening_mesh,
            orphaned_openings,
        }
    }
}
