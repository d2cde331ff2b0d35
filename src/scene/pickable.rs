//! The pickable-object record and its shape catalogue.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::geometry::{primitives, MeshData};

/// The six primitive shapes eligible for picking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// 1.5 × 1.5 × 1 box.
    Cuboid,
    /// Cone of radius 1, height 2.
    Cone,
    /// Unit octahedron.
    Octahedron,
    /// Torus of radius 1 with a 0.5 tube.
    Torus,
    /// Capped cylinder of radius 1, height 2.
    Cylinder,
    /// Sphere of radius 1.25.
    Sphere,
}

impl ShapeKind {
    /// All pickable shapes, in registry assignment order.
    pub const ALL: [Self; 6] = [
        Self::Cuboid,
        Self::Cone,
        Self::Octahedron,
        Self::Torus,
        Self::Cylinder,
        Self::Sphere,
    ];

    /// Shape for a registry identifier; identifiers beyond the catalogue
    /// wrap around.
    #[must_use]
    pub fn for_id(id: usize) -> Self {
        Self::ALL[id % Self::ALL.len()]
    }

    /// Generate this shape's mesh at its fixed gallery dimensions.
    #[must_use]
    pub fn mesh(self) -> MeshData {
        match self {
            Self::Cuboid => primitives::cuboid(1.5, 1.5, 1.0),
            Self::Cone => primitives::cone(1.0, 2.0, 32),
            Self::Octahedron => primitives::octahedron(1.0),
            Self::Torus => primitives::torus(1.0, 0.5, 16, 60),
            Self::Cylinder => primitives::cylinder(1.0, 1.0, 2.0, 32),
            Self::Sphere => primitives::uv_sphere(1.25, 32, 16),
        }
    }

    /// Radius of the bounding sphere used for ray picking.
    #[must_use]
    pub fn bounding_radius(self) -> f32 {
        match self {
            Self::Cuboid => Vec3::new(0.75, 0.75, 0.5).length(),
            Self::Cone | Self::Cylinder => std::f32::consts::SQRT_2,
            Self::Octahedron => 1.0,
            Self::Torus => 1.5,
            Self::Sphere => 1.25,
        }
    }
}

/// A scene object eligible for pointer-ray picking.
///
/// The record carries its own identifier and visual state rather than
/// tagging renderer meshes with ad hoc fields; the registry index and
/// `id` always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct Pickable {
    /// Stable identifier, equal to the creation index.
    pub id: usize,
    /// Which primitive this object renders as.
    pub shape: ShapeKind,
    /// World-space position.
    pub position: Vec3,
    /// Euler XYZ rotation in radians.
    pub rotation: Vec3,
    /// Color assigned at creation.
    pub base_color: [f32; 3],
    /// Color currently rendered (highlight state).
    pub current_color: [f32; 3],
}

impl Pickable {
    /// Radius of this object's picking bounding sphere.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        self.shape.bounding_radius()
    }

    /// Model matrix from the current position and rotation.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_selection_wraps_past_the_catalogue() {
        assert_eq!(ShapeKind::for_id(0), ShapeKind::Cuboid);
        assert_eq!(ShapeKind::for_id(5), ShapeKind::Sphere);
        assert_eq!(ShapeKind::for_id(6), ShapeKind::Cuboid);
        assert_eq!(ShapeKind::for_id(8), ShapeKind::Octahedron);
    }

    #[test]
    fn bounding_radii_enclose_generated_meshes() {
        for shape in ShapeKind::ALL {
            let radius = shape.bounding_radius();
            for vertex in &shape.mesh().vertices {
                let len = Vec3::from_array(vertex.position).length();
                assert!(
                    len <= radius + 1e-4,
                    "{shape:?}: vertex at {len} exceeds radius {radius}"
                );
            }
        }
    }
}
