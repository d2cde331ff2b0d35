//! CPU-side mesh generation for the gallery primitives.
//!
//! Meshes are plain vertex/index buffers generated once at startup. Each
//! mesh carries triangle indices for solid draws and can derive a deduped
//! edge list for wireframe (line-list) draws.

pub mod primitives;

use glam::Vec3;

/// A single mesh vertex: position, smooth normal, texture coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Object-space normal (unit length).
    pub normal: [f32; 3],
    /// Texture coordinates in [0, 1].
    pub uv: [f32; 2],
}

/// Vertex/index data for one primitive.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex list.
    pub vertices: Vec<Vertex>,
    /// Triangle-list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of triangle indices.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Derive a line-list index buffer containing each unique triangle
    /// edge exactly once, for wireframe rendering.
    #[must_use]
    pub fn wireframe_edges(&self) -> Vec<u32> {
        let mut edges: Vec<(u32, u32)> = Vec::with_capacity(self.indices.len());
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])]
            {
                edges.push((a.min(b), a.max(b)));
            }
        }
        edges.sort_unstable();
        edges.dedup();

        let mut out = Vec::with_capacity(edges.len() * 2);
        for (a, b) in edges {
            out.push(a);
            out.push(b);
        }
        out
    }

    /// Recompute smooth vertex normals by area-weighted accumulation of
    /// face normals. Degenerate vertices fall back to +Z.
    pub fn compute_normals(&mut self) {
        let mut accum = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] =
                [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let pa = Vec3::from_array(self.vertices[a].position);
            let pb = Vec3::from_array(self.vertices[b].position);
            let pc = Vec3::from_array(self.vertices[c].position);
            let face = (pb - pa).cross(pc - pa);
            accum[a] += face;
            accum[b] += face;
            accum[c] += face;
        }
        for (vertex, normal) in self.vertices.iter_mut().zip(accum) {
            let n = normal.normalize_or_zero();
            vertex.normal = if n == Vec3::ZERO {
                [0.0, 0.0, 1.0]
            } else {
                n.to_array()
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> MeshData {
        let v = |x: f32, y: f32| Vertex {
            position: [x, y, 0.0],
            normal: [0.0; 3],
            uv: [0.0; 2],
        };
        MeshData {
            vertices: vec![
                v(0.0, 0.0),
                v(1.0, 0.0),
                v(1.0, 1.0),
                v(0.0, 1.0),
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    #[test]
    fn wireframe_edges_dedups_shared_diagonal() {
        let edges = quad().wireframe_edges();
        // Two triangles share the 0-2 diagonal: 5 unique edges, 10 indices.
        assert_eq!(edges.len(), 10);
        let pairs: Vec<(u32, u32)> =
            edges.chunks_exact(2).map(|e| (e[0], e[1])).collect();
        assert_eq!(pairs.iter().filter(|&&e| e == (0, 2)).count(), 1);
    }

    #[test]
    fn computed_normals_face_out_of_ccw_quad() {
        let mut mesh = quad();
        mesh.compute_normals();
        for vertex in &mesh.vertices {
            assert!((Vec3::from_array(vertex.normal) - Vec3::Z).length() < 1e-6);
        }
    }
}
