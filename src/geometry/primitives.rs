//! Generators for the gallery's primitive meshes.
//!
//! Dimensions and tessellation counts mirror the fixed shapes the scene
//! uses; all generators are pure and deterministic.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::{MeshData, Vertex};

fn vertex(position: Vec3, normal: Vec3, uv: [f32; 2]) -> Vertex {
    Vertex {
        position: position.to_array(),
        normal: normal.to_array(),
        uv,
    }
}

/// Axis-aligned box centered at the origin, with per-face normals.
#[must_use]
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
    let mut mesh = MeshData::default();

    let mut push_face = |corners: [Vec3; 4], normal: Vec3| {
        let base = mesh.vertices.len() as u32;
        let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        for (corner, uv) in corners.into_iter().zip(uvs) {
            mesh.vertices.push(vertex(corner, normal, uv));
        }
        mesh.indices.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base,
            base + 2,
            base + 3,
        ]);
    };

    push_face(
        [
            Vec3::new(hw, -hh, -hd),
            Vec3::new(hw, -hh, hd),
            Vec3::new(hw, hh, hd),
            Vec3::new(hw, hh, -hd),
        ],
        Vec3::X,
    );
    push_face(
        [
            Vec3::new(-hw, -hh, hd),
            Vec3::new(-hw, -hh, -hd),
            Vec3::new(-hw, hh, -hd),
            Vec3::new(-hw, hh, hd),
        ],
        -Vec3::X,
    );
    push_face(
        [
            Vec3::new(-hw, hh, -hd),
            Vec3::new(hw, hh, -hd),
            Vec3::new(hw, hh, hd),
            Vec3::new(-hw, hh, hd),
        ],
        Vec3::Y,
    );
    push_face(
        [
            Vec3::new(-hw, -hh, hd),
            Vec3::new(hw, -hh, hd),
            Vec3::new(hw, -hh, -hd),
            Vec3::new(-hw, -hh, -hd),
        ],
        -Vec3::Y,
    );
    push_face(
        [
            Vec3::new(-hw, -hh, hd),
            Vec3::new(hw, -hh, hd),
            Vec3::new(hw, hh, hd),
            Vec3::new(-hw, hh, hd),
        ],
        Vec3::Z,
    );
    push_face(
        [
            Vec3::new(hw, -hh, -hd),
            Vec3::new(-hw, -hh, -hd),
            Vec3::new(-hw, hh, -hd),
            Vec3::new(hw, hh, -hd),
        ],
        -Vec3::Z,
    );

    mesh
}

/// Capped cylinder (or truncated cone) centered at the origin, axis +Y.
/// A zero top radius produces a cone; zero-radius caps are skipped.
#[must_use]
pub fn cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: usize,
) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height / 2.0;
    let slope = (radius_bottom - radius_top) / height;

    // Side wall: two rings of shared vertices with slanted normals.
    for (ring, (y, radius)) in
        [(half, radius_top), (-half, radius_bottom)].into_iter().enumerate()
    {
        for seg in 0..=radial_segments {
            let u = seg as f32 / radial_segments as f32;
            let theta = u * TAU;
            let (sin, cos) = theta.sin_cos();
            let normal = Vec3::new(sin, slope, cos).normalize();
            mesh.vertices.push(vertex(
                Vec3::new(radius * sin, y, radius * cos),
                normal,
                [u, ring as f32],
            ));
        }
    }
    let ring_stride = radial_segments as u32 + 1;
    for seg in 0..radial_segments as u32 {
        let a = seg;
        let b = seg + ring_stride;
        mesh.indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
    }

    // Caps: triangle fan around a center vertex.
    for (y, radius, normal) in [
        (half, radius_top, Vec3::Y),
        (-half, radius_bottom, -Vec3::Y),
    ] {
        if radius <= 0.0 {
            continue;
        }
        let center = mesh.vertices.len() as u32;
        mesh.vertices
            .push(vertex(Vec3::new(0.0, y, 0.0), normal, [0.5, 0.5]));
        for seg in 0..=radial_segments {
            let theta = seg as f32 / radial_segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.vertices.push(vertex(
                Vec3::new(radius * sin, y, radius * cos),
                normal,
                [0.5 + sin / 2.0, 0.5 + cos / 2.0],
            ));
        }
        for seg in 0..radial_segments as u32 {
            let rim = center + 1 + seg;
            if normal.y > 0.0 {
                mesh.indices.extend_from_slice(&[center, rim, rim + 1]);
            } else {
                mesh.indices.extend_from_slice(&[center, rim + 1, rim]);
            }
        }
    }

    mesh
}

/// Cone centered at the origin with its apex at +Y.
#[must_use]
pub fn cone(radius: f32, height: f32, radial_segments: usize) -> MeshData {
    cylinder(0.0, radius, height, radial_segments)
}

/// Regular octahedron with vertices on the coordinate axes.
#[must_use]
pub fn octahedron(radius: f32) -> MeshData {
    let positions = [
        Vec3::X,
        -Vec3::X,
        Vec3::Y,
        -Vec3::Y,
        Vec3::Z,
        -Vec3::Z,
    ];
    let mut mesh = MeshData {
        vertices: positions
            .iter()
            .map(|&dir| {
                vertex(dir * radius, dir, [
                    0.5 + dir.x / 2.0,
                    0.5 + dir.y / 2.0,
                ])
            })
            .collect(),
        indices: vec![
            0, 2, 4, 2, 1, 4, 1, 3, 4, 3, 0, 4, //
            2, 0, 5, 1, 2, 5, 3, 1, 5, 0, 3, 5,
        ],
    };
    mesh.compute_normals();
    mesh
}

/// Torus in the XY plane centered at the origin.
#[must_use]
pub fn torus(
    radius: f32,
    tube: f32,
    radial_segments: usize,
    tubular_segments: usize,
) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            mesh.vertices.push(vertex(
                position,
                (position - center).normalize(),
                [
                    i as f32 / tubular_segments as f32,
                    j as f32 / radial_segments as f32,
                ],
            ));
        }
    }
    let stride = tubular_segments as u32 + 1;
    for j in 0..radial_segments as u32 {
        for i in 0..tubular_segments as u32 {
            let a = j * stride + i;
            let b = (j + 1) * stride + i;
            mesh.indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }
    mesh
}

/// Latitude/longitude sphere centered at the origin.
#[must_use]
pub fn uv_sphere(
    radius: f32,
    width_segments: usize,
    height_segments: usize,
) -> MeshData {
    let mut mesh = MeshData::default();
    for y in 0..=height_segments {
        let v = y as f32 / height_segments as f32;
        let phi = v * PI;
        for x in 0..=width_segments {
            let u = x as f32 / width_segments as f32;
            let theta = u * TAU;
            let normal = Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            mesh.vertices
                .push(vertex(normal * radius, normal, [u, 1.0 - v]));
        }
    }
    let stride = width_segments as u32 + 1;
    for y in 0..height_segments as u32 {
        for x in 0..width_segments as u32 {
            let a = y * stride + x;
            let b = (y + 1) * stride + x;
            if y != 0 {
                mesh.indices.extend_from_slice(&[a, b, a + 1]);
            }
            if y != height_segments as u32 - 1 {
                mesh.indices.extend_from_slice(&[b, b + 1, a + 1]);
            }
        }
    }
    mesh
}

/// Point on the (p, q) torus-knot curve at parameter `u`.
fn knot_point(u: f32, radius: f32, p: f32, q: f32) -> Vec3 {
    let quo = q / p * u;
    let cs = quo.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * quo.sin() * 0.5,
    )
}

/// Torus knot wound `p` times around the axis and `q` times through the
/// hole, swept by a tube of the given radius.
#[must_use]
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: usize,
    radial_segments: usize,
    p: u32,
    q: u32,
) -> MeshData {
    let mut mesh = MeshData::default();
    let (p, q) = (p as f32, q as f32);

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p * TAU;
        let center = knot_point(u, radius, p, q);
        let ahead = knot_point(u + 0.01, radius, p, q);

        // Approximate Frenet frame from neighboring curve samples.
        let tangent = ahead - center;
        let binormal = tangent.cross(ahead + center).normalize();
        let normal = binormal.cross(tangent).normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let offset = normal * (-tube * v.cos()) + binormal * (tube * v.sin());
            mesh.vertices.push(vertex(
                center + offset,
                offset.normalize(),
                [
                    i as f32 / tubular_segments as f32,
                    j as f32 / radial_segments as f32,
                ],
            ));
        }
    }
    let stride = radial_segments as u32 + 1;
    for j in 0..tubular_segments as u32 {
        for i in 0..radial_segments as u32 {
            let a = j * stride + i;
            let b = (j + 1) * stride + i;
            mesh.indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_has_one_quad_per_face() {
        let mesh = cuboid(1.5, 1.5, 1.0);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn sphere_normals_are_radial_unit_vectors() {
        let mesh = uv_sphere(1.25, 16, 8);
        for vertex in &mesh.vertices {
            let pos = Vec3::from_array(vertex.position);
            let normal = Vec3::from_array(vertex.normal);
            assert!((normal.length() - 1.0).abs() < 1e-5);
            assert!((pos - normal * 1.25).length() < 1e-4);
        }
    }

    #[test]
    fn torus_stays_within_outer_radius() {
        let mesh = torus(1.0, 0.5, 16, 60);
        for vertex in &mesh.vertices {
            let pos = Vec3::from_array(vertex.position);
            assert!(pos.length() <= 1.5 + 1e-4);
        }
    }

    #[test]
    fn cone_skips_the_degenerate_top_cap() {
        let cone_mesh = cone(1.0, 2.0, 32);
        let capped = cylinder(1.0, 1.0, 2.0, 32);
        assert!(cone_mesh.vertices.len() < capped.vertices.len());
        // Apex sits at +height/2.
        let top = cone_mesh
            .vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MIN, f32::max);
        assert!((top - 1.0).abs() < 1e-5);
    }

    #[test]
    fn knot_vertices_lie_on_the_tube_surface() {
        let mesh = torus_knot(1.3, 0.1, 64, 5, 12, 3);
        assert_eq!(mesh.vertices.len(), 65 * 6);
        assert!(mesh.indices.len() == 64 * 5 * 6);
    }
}
