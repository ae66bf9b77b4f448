use crate::math::{Point3, Vector3};
use crate::model::OpeningKind;
use crate::operations::OpeningPlacement;

use super::{plan_to_world, TriangleMesh};

/// Quads of the box, counter-clockwise seen from outside. Corner `i` sits
/// on the positive side of axis `k` when bit `k` of `i` is set, in the
/// frame (along, up, across).
const BOX_FACES: [[u32; 4]; 6] = [
    [1, 3, 7, 5],
    [0, 4, 6, 2],
    [2, 6, 7, 3],
    [0, 1, 5, 4],
    [4, 5, 7, 6],
    [0, 2, 3, 1],
];

/// An oriented box standing in for a door or window in the 3D view.
///
/// The box is centered on the wall centerline at half the opening height
/// and rotated about the vertical axis to follow the wall.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningSolid {
    pub opening_id: String,
    pub kind: OpeningKind,
    /// Box center in the Y-up frame.
    pub center: Point3,
    /// Unit axis along the wall.
    pub along: Vector3,
    /// Unit vertical axis.
    pub up: Vector3,
    /// Unit axis through the wall.
    pub across: Vector3,
    /// Extents along `along`, `up` and `across`.
    pub size: Vector3,
    /// Rotation about the vertical axis, in radians.
    pub yaw: f64,
}

impl OpeningSolid {
    /// Lifts a sketch-plane placement into a 3D box.
    #[must_use]
    pub fn from_placement(placement: &OpeningPlacement) -> Self {
        let (sin, cos) = placement.orientation.sin_cos();
        Self {
            opening_id: placement.opening_id.clone(),
            kind: placement.kind,
            center: plan_to_world(&placement.center, placement.height / 2.0),
            along: Vector3::new(cos, 0.0, sin),
            up: Vector3::y(),
            across: Vector3::new(-sin, 0.0, cos),
            size: Vector3::new(placement.width, placement.height, placement.depth),
            yaw: -placement.orientation,
        }
    }

    /// The eight corners, indexed by sign bits: bit 0 along, bit 1 up, bit 2 across.
    #[must_use]
    pub fn corners(&self) -> [Point3; 8] {
        let half = self.size / 2.0;
        std::array::from_fn(|i| {
            let sign = |bit: usize| if i & bit == 0 { -1.0 } else { 1.0 };
            self.center
                + self.along * (sign(1) * half.x)
                + self.up * (sign(2) * half.y)
                + self.across * (sign(4) * half.z)
        })
    }

    /// Triangulates the box with outward-facing winding.
    #[must_use]
    pub fn to_mesh(&self) -> TriangleMesh {
        let mut mesh = TriangleMesh {
            vertices: self.corners().to_vec(),
            normals: Vec::new(),
            indices: BOX_FACES
                .iter()
                .flat_map(|[a, b, c, d]| [[*a, *b, *c], [*a, *c, *d]])
                .collect(),
        };
        mesh.compute_normals();
        mesh
    }
}
