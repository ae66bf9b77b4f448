mod opening_solid;
mod tessellate_walls;

pub use opening_solid::OpeningSolid;
pub use tessellate_walls::{TessellateWalls, VERTEX_WELD_SCALE};

use crate::math::{Point2, Point3, Vector3, TOLERANCE};

/// Maps a sketch-plane point at `elevation` into the Y-up render frame.
///
/// Sketch `x` stays `x`, sketch `y` becomes depth `z`, and `elevation`
/// becomes `y`.
#[must_use]
pub fn plan_to_world(p: &Point2, elevation: f64) -> Point3 {
    Point3::new(p.x, elevation, p.y)
}

/// An indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Whether the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends `other`, offsetting its indices past the current vertices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|t| [t[0] + offset, t[1] + offset, t[2] + offset]));
    }

    /// Recomputes per-vertex normals as the area-weighted average of the
    /// normals of the triangles sharing each vertex.
    ///
    /// Vertices with no usable triangle get a zero normal.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![Vector3::zeros(); self.vertices.len()];
        for tri in &self.indices {
            let [a, b, c] = tri.map(|i| i as usize);
            let (Some(pa), Some(pb), Some(pc)) =
                (self.vertices.get(a), self.vertices.get(b), self.vertices.get(c))
            else {
                continue;
            };
            let face = (pb - pa).cross(&(pc - pa));
            for i in [a, b, c] {
                normals[i] += face;
            }
        }
        for n in &mut normals {
            let len = n.norm();
            if len > TOLERANCE {
                *n /= len;
            } else {
                *n = Vector3::zeros();
            }
        }
        self.normals = normals;
    }

    /// Signed volume enclosed by the mesh (positive for outward winding).
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.indices
            .iter()
            .filter_map(|t| {
                let a = self.vertices.get(t[0] as usize)?;
                let b = self.vertices.get(t[1] as usize)?;
                let c = self.vertices.get(t[2] as usize)?;
                Some(a.coords.dot(&b.coords.cross(&c.coords)) / 6.0)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(z: f64) -> TriangleMesh {
        let mut mesh = TriangleMesh {
            vertices: vec![
                Point3::new(0.0, 0.0, z),
                Point3::new(1.0, 0.0, z),
                Point3::new(0.0, 1.0, z),
            ],
            normals: Vec::new(),
            indices: vec![[0, 1, 2]],
        };
        mesh.compute_normals();
        mesh
    }

    #[test]
    fn plan_to_world_swaps_axes() {
        let p = plan_to_world(&Point2::new(3.0, 4.0), 7.0);
        assert_eq!(p, Point3::new(3.0, 7.0, 4.0));
    }

    #[test]
    fn normals_follow_winding() {
        let mesh = triangle(0.0);
        assert_eq!(mesh.normals.len(), 3);
        for n in &mesh.normals {
            assert!((n - Vector3::z()).norm() < 1e-12);
        }
    }

    #[test]
    fn merge_offsets_indices() {
        let mut mesh = triangle(0.0);
        mesh.merge(&triangle(1.0));
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.normals.len(), 6);
        assert_eq!(mesh.indices[1], [3, 4, 5]);
    }

    #[test]
    fn unused_vertex_gets_zero_normal() {
        let mut mesh = triangle(0.0);
        mesh.vertices.push(Point3::new(5.0, 5.0, 5.0));
        mesh.compute_normals();
        assert_eq!(mesh.normals[3], Vector3::zeros());
    }
}
