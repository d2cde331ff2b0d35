//! Screen-space ray construction and bounding-sphere intersection.

use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::scene::SceneRegistry;

/// A world-space ray with unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin (the camera eye).
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    /// Build a pick ray through the given screen position.
    ///
    /// The ray is computed from the camera basis vectors and field of
    /// view rather than by inverting the view-projection matrix.
    #[must_use]
    pub fn from_screen(
        camera: &Camera,
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
    ) -> Self {
        let pointer = ndc(screen_x, screen_y, screen_width, screen_height);

        let forward = (camera.target - camera.eye).normalize();
        let right = forward.cross(camera.up).normalize();
        let up = right.cross(forward);

        let tan_fov = (camera.fovy / 2.0).to_radians().tan();
        let ray_x = pointer.x * camera.aspect * tan_fov;
        let ray_y = pointer.y * tan_fov;

        Self {
            origin: camera.eye,
            dir: (forward + right * ray_x + up * ray_y).normalize(),
        }
    }
}

/// Map screen coordinates to normalized device coordinates in [-1, 1],
/// with y up.
#[must_use]
pub fn ndc(
    screen_x: f32,
    screen_y: f32,
    screen_width: f32,
    screen_height: f32,
) -> Vec2 {
    Vec2::new(
        (screen_x / screen_width) * 2.0 - 1.0,
        1.0 - (screen_y / screen_height) * 2.0,
    )
}

/// One ray/object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Identifier of the intersected object.
    pub id: usize,
    /// Ray parameter at the intersection (world distance).
    pub t: f32,
}

/// Ray-sphere intersection test.
///
/// Returns the distance along the ray to the first intersection in front
/// of the origin, or `None`. The far root is used when the origin is
/// inside the sphere.
#[must_use]
pub fn ray_sphere_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_dir.dot(ray_dir);
    let b = 2.0 * oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t > 0.0 {
        Some(t)
    } else {
        let t2 = (-b + discriminant.sqrt()) / (2.0 * a);
        (t2 > 0.0).then_some(t2)
    }
}

/// Intersect a ray against every pickable's bounding sphere, nearest
/// first. Returns nothing while the group is hidden.
#[must_use]
pub fn intersect_registry(ray: Ray, registry: &SceneRegistry) -> Vec<Hit> {
    if !registry.group_visible {
        return Vec::new();
    }

    let mut hits: Vec<Hit> = registry
        .iter()
        .filter_map(|object| {
            ray_sphere_intersect(
                ray.origin,
                ray.dir,
                object.position,
                object.bounding_radius(),
            )
            .map(|t| Hit { id: object.id, t })
        })
        .collect();
    hits.sort_by(|a, b| a.t.total_cmp(&b.t));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 7.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.6,
            fovy: 75.0,
            znear: 0.1,
            zfar: 2000.0,
        }
    }

    #[test]
    fn ndc_maps_screen_corners() {
        assert_eq!(ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    }

    #[test]
    fn center_click_rays_through_the_target() {
        let ray = Ray::from_screen(&camera(), 400.0, 300.0, 800.0, 600.0);
        assert!((ray.origin - Vec3::new(0.0, 0.0, 7.0)).length() < 1e-6);
        assert!((ray.dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn sphere_hit_distance_is_the_near_surface() {
        let t = ray_sphere_intersect(
            Vec3::new(0.0, 0.0, 7.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            1.0,
        );
        assert_eq!(t, Some(6.0));
    }

    #[test]
    fn inside_sphere_uses_the_far_root() {
        let t = ray_sphere_intersect(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            2.0,
        );
        assert_eq!(t, Some(2.0));
    }

    #[test]
    fn miss_returns_none() {
        let t = ray_sphere_intersect(
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::ZERO,
            1.0,
        );
        assert_eq!(t, None);
    }

    #[test]
    fn registry_hits_are_sorted_nearest_first() {
        let mut registry = SceneRegistry::build([0.5; 3]);
        // Stack two objects along the ray from the camera at +Z.
        if let Some(a) = registry.get_mut(0) {
            a.position = Vec3::new(0.0, 0.0, 0.0);
        }
        if let Some(b) = registry.get_mut(1) {
            b.position = Vec3::new(0.0, 0.0, 3.0);
        }
        // Move the rest out of the way.
        for id in 2..registry.len() {
            if let Some(object) = registry.get_mut(id) {
                object.position = Vec3::new(100.0, 100.0, 100.0);
            }
        }
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        let hits = intersect_registry(ray, &registry);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 1);
        assert_eq!(hits[1].id, 0);
        assert!(hits[0].t < hits[1].t);
    }

    #[test]
    fn hidden_group_yields_no_hits() {
        let mut registry = SceneRegistry::build([0.5; 3]);
        registry.group_visible = false;
        let ray = Ray {
            origin: Vec3::new(4.0, 0.0, 10.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        assert!(intersect_registry(ray, &registry).is_empty());
    }
}
