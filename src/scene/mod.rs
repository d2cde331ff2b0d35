//! Scene state: the pickable-object registry and the decorative fixtures.

pub mod fixtures;
pub mod pickable;
pub mod registry;

pub use fixtures::{Fixture, Fixtures};
pub use pickable::{Pickable, ShapeKind};
pub use registry::SceneRegistry;

use crate::options::Options;

/// Everything drawn each frame: the pickable grid plus the fixtures.
#[derive(Debug, Clone)]
pub struct Scene {
    /// The deterministic pickable grid.
    pub registry: SceneRegistry,
    /// The paper sphere and torus knot.
    pub fixtures: Fixtures,
}

impl Scene {
    /// Build the scene from configured colors and fixture parameters.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let mut registry = SceneRegistry::build(options.colors.base);
        registry.group_visible = options.display.group_visible;
        Self {
            registry,
            fixtures: Fixtures::new(
                options.colors.knot,
                options.display.knot_scale_x,
            ),
        }
    }
}
