//! Non-pickable scene fixtures: the paper sphere and the torus knot.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Spin rate of the paper sphere around X, radians per second.
const SPHERE_SPIN: f32 = 0.6;

/// Spin rate of the torus knot around Z, radians per second.
const KNOT_SPIN: f32 = 1.8;

/// Allowed range for the knot's X scale.
const KNOT_SCALE_RANGE: (f32, f32) = (0.0, 5.0);

/// A decorative scene object: transform plus color, no pick identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    /// World-space position.
    pub position: Vec3,
    /// Euler XYZ rotation in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Solid color (ignored by the textured pipeline).
    pub color: [f32; 3],
}

impl Fixture {
    /// Model matrix from the current transform.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(
            self.scale,
            rotation,
            self.position,
        )
    }
}

/// The two continuously spinning fixtures.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixtures {
    /// Large paper-textured sphere at the origin.
    pub paper_sphere: Fixture,
    /// Lit torus knot at the origin.
    pub torus_knot: Fixture,
}

impl Fixtures {
    /// Create the fixtures with the given knot tint and initial X scale.
    #[must_use]
    pub fn new(knot_color: [f32; 3], knot_scale_x: f32) -> Self {
        let mut fixtures = Self {
            paper_sphere: Fixture {
                position: Vec3::ZERO,
                rotation: Vec3::ZERO,
                scale: Vec3::ONE,
                color: [1.0; 3],
            },
            torus_knot: Fixture {
                position: Vec3::ZERO,
                rotation: Vec3::ZERO,
                scale: Vec3::ONE,
                color: knot_color,
            },
        };
        fixtures.set_knot_scale_x(knot_scale_x);
        fixtures
    }

    /// Advance the continuous spins by `dt` seconds.
    pub fn spin(&mut self, dt: f32) {
        self.paper_sphere.rotation.x += SPHERE_SPIN * dt;
        self.torus_knot.rotation.z += KNOT_SPIN * dt;
    }

    /// Set the knot's X scale, clamped to the allowed range.
    pub fn set_knot_scale_x(&mut self, scale: f32) {
        self.torus_knot.scale.x =
            scale.clamp(KNOT_SCALE_RANGE.0, KNOT_SCALE_RANGE.1);
    }

    /// Nudge the knot's X scale by `delta`, clamped to the allowed range.
    pub fn adjust_knot_scale_x(&mut self, delta: f32) {
        self.set_knot_scale_x(self.torus_knot.scale.x + delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_advances_both_fixtures() {
        let mut fixtures = Fixtures::new([0.5; 3], 1.0);
        fixtures.spin(1.0);
        assert!(fixtures.paper_sphere.rotation.x > 0.0);
        assert!(fixtures.torus_knot.rotation.z > 0.0);
    }

    #[test]
    fn knot_scale_clamps_to_slider_range() {
        let mut fixtures = Fixtures::new([0.5; 3], 1.0);
        fixtures.adjust_knot_scale_x(100.0);
        assert_eq!(fixtures.torus_knot.scale.x, 5.0);
        fixtures.adjust_knot_scale_x(-100.0);
        assert_eq!(fixtures.torus_knot.scale.x, 0.0);
        fixtures.set_knot_scale_x(2.5);
        assert_eq!(fixtures.torus_knot.scale.x, 2.5);
    }
}
