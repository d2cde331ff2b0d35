//! The deterministic registry of pickable objects.

use glam::Vec3;

use super::pickable::{Pickable, ShapeKind};

/// Grid coordinates walked in row-major order during construction.
const GRID_STEPS: [f32; 3] = [-5.0, 0.0, 5.0];

/// Distance scale of the circular placement derived from each identifier.
const PLACEMENT_RADIUS: f32 = 4.0;

/// Ordered, fixed collection of pickable objects.
///
/// Construction is pure and total: the 3×3 grid walk assigns identifiers
/// 0..=8 in row-major order and places object `k` at
/// `(4·cos k, 4·sin k, 0)`. Objects are never added or removed afterwards.
#[derive(Debug, Clone)]
pub struct SceneRegistry {
    objects: Vec<Pickable>,
    /// Whether the pickable group is rendered (and hit-testable).
    pub group_visible: bool,
}

impl SceneRegistry {
    /// Build the registry with every object tinted `base_color`.
    #[must_use]
    pub fn build(base_color: [f32; 3]) -> Self {
        let mut objects = Vec::with_capacity(GRID_STEPS.len() * GRID_STEPS.len());
        for _i in GRID_STEPS {
            for _j in GRID_STEPS {
                let id = objects.len();
                let angle = id as f32;
                objects.push(Pickable {
                    id,
                    shape: ShapeKind::for_id(id),
                    position: Vec3::new(
                        PLACEMENT_RADIUS * angle.cos(),
                        PLACEMENT_RADIUS * angle.sin(),
                        0.0,
                    ),
                    rotation: Vec3::ZERO,
                    base_color,
                    current_color: base_color,
                });
            }
        }
        Self {
            objects,
            group_visible: true,
        }
    }

    /// Number of registered objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the registry is empty (never true after `build`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Object by identifier.
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&Pickable> {
        self.objects.get(id)
    }

    /// Mutable object by identifier.
    pub fn get_mut(&mut self, id: usize) -> Option<&mut Pickable> {
        self.objects.get_mut(id)
    }

    /// Iterate the objects in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Pickable> {
        self.objects.iter()
    }

    /// Toggle the group visibility flag.
    pub fn toggle_visible(&mut self) {
        self.group_visible = !self.group_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nine_objects_with_sequential_ids() {
        let registry = SceneRegistry::build([1.0, 0.0, 0.0]);
        assert_eq!(registry.len(), 9);
        for (index, object) in registry.iter().enumerate() {
            assert_eq!(object.id, index);
        }
    }

    #[test]
    fn places_object_k_on_the_radius_four_circle() {
        let registry = SceneRegistry::build([0.5; 3]);
        for object in registry.iter() {
            let k = object.id as f32;
            let expected = Vec3::new(4.0 * k.cos(), 4.0 * k.sin(), 0.0);
            assert!((object.position - expected).length() < 1e-6);
        }
    }

    #[test]
    fn shape_kinds_repeat_modulo_catalogue_size() {
        let registry = SceneRegistry::build([0.5; 3]);
        for object in registry.iter() {
            assert_eq!(object.shape, ShapeKind::for_id(object.id % 6));
        }
    }

    #[test]
    fn objects_start_with_base_color_and_visible_group() {
        let registry = SceneRegistry::build([0.1, 0.2, 0.3]);
        assert!(registry.group_visible);
        for object in registry.iter() {
            assert_eq!(object.current_color, [0.1, 0.2, 0.3]);
            assert_eq!(object.base_color, object.current_color);
        }
    }
}
