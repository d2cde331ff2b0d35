//! The pick/highlight controller: a single-selection state machine.

use glam::Vec3;
use rand::Rng;
use web_time::Instant;

use super::ray::{intersect_registry, ndc, Ray};
use crate::animation::{EasingFunction, Tween, TweenTimeline};
use crate::camera::Camera;
use crate::options::ColorOptions;
use crate::scene::SceneRegistry;

/// Backstop position selected objects fly toward.
const TWEEN_TARGET: Vec3 = Vec3::new(0.0, 0.0, 25.0);

/// Pixel offset of the tooltip from the cursor.
const TOOLTIP_OFFSET: f32 = 10.0;

/// The informational overlay shown next to the cursor after a hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Two-line body: normalized pointer coordinates, 3 decimal places.
    pub text: String,
    /// Left edge in physical pixels.
    pub x: f32,
    /// Top edge in physical pixels.
    pub y: f32,
}

/// What a click transition did, for the embedder to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    /// The newly active object, if the click hit.
    pub selected: Option<usize>,
    /// Replacement tooltip; `None` removes any existing tooltip.
    pub tooltip: Option<Tooltip>,
}

/// Maintains single-selection semantics under pointer clicks and drives
/// highlight, tween, and tooltip side effects.
///
/// States are `Idle` (no active object) and `Active(id)`; `Idle` is
/// initial and there is no terminal state. The selection always refers to
/// a live registry object, and at most one object carries the highlight
/// color at any time.
#[derive(Debug)]
pub struct PickController {
    active: Option<usize>,
    colors: ColorOptions,
}

impl PickController {
    /// Create an idle controller using the configured palette.
    #[must_use]
    pub fn new(colors: ColorOptions) -> Self {
        Self {
            active: None,
            colors,
        }
    }

    /// The currently active object identifier, if any.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Process a click at screen position (`x`, `y`).
    ///
    /// Resets the previous selection, highlights the nearest hit (if
    /// any), schedules its move tween on `timeline`, and returns the
    /// tooltip replacement.
    pub fn handle_click<R: Rng + ?Sized>(
        &mut self,
        x: f32,
        y: f32,
        viewport: (f32, f32),
        camera: &Camera,
        registry: &mut SceneRegistry,
        timeline: &mut TweenTimeline,
        rng: &mut R,
        now: Instant,
    ) -> ClickOutcome {
        let (width, height) = viewport;
        let ray = Ray::from_screen(camera, x, y, width, height);
        let hits = intersect_registry(ray, registry);

        self.reset_active(registry);

        let Some(nearest) = hits.first() else {
            return ClickOutcome {
                selected: None,
                tooltip: None,
            };
        };

        if let Some(object) = registry.get_mut(nearest.id) {
            object.current_color = self.colors.highlight;
            timeline.start(Tween::new(
                object.id,
                object.position,
                TWEEN_TARGET,
                now,
                Tween::randomized_duration(rng),
                EasingFunction::ExponentialInOut,
            ));
            self.active = Some(object.id);
        }

        let pointer = ndc(x, y, width, height);
        ClickOutcome {
            selected: self.active,
            tooltip: Some(Tooltip {
                text: format!("x = {:.3}\ny = {:.3}", pointer.x, pointer.y),
                x: x + TOOLTIP_OFFSET,
                y: y + TOOLTIP_OFFSET,
            }),
        }
    }

    /// Drop the selection, restoring the inactive color.
    pub fn clear(&mut self, registry: &mut SceneRegistry) {
        self.reset_active(registry);
    }

    fn reset_active(&mut self, registry: &mut SceneRegistry) {
        if let Some(id) = self.active.take() {
            if let Some(object) = registry.get_mut(id) {
                object.current_color = self.colors.inactive;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use web_time::Duration;

    use super::*;

    const VIEWPORT: (f32, f32) = (800.0, 600.0);

    fn camera_over_object_zero() -> Camera {
        Camera {
            eye: Vec3::new(4.0, 0.0, 20.0),
            target: Vec3::new(4.0, 0.0, 0.0),
            up: Vec3::Y,
            aspect: VIEWPORT.0 / VIEWPORT.1,
            fovy: 75.0,
            znear: 0.1,
            zfar: 2000.0,
        }
    }

    fn setup() -> (PickController, SceneRegistry, TweenTimeline, StdRng) {
        let colors = ColorOptions::default();
        (
            PickController::new(colors.clone()),
            SceneRegistry::build(colors.base),
            TweenTimeline::new(),
            StdRng::seed_from_u64(7),
        )
    }

    fn highlight_count(registry: &SceneRegistry, colors: &ColorOptions) -> usize {
        registry
            .iter()
            .filter(|o| o.current_color == colors.highlight)
            .count()
    }

    #[test]
    fn click_on_empty_space_while_idle_changes_nothing() {
        let (mut controller, mut registry, mut timeline, mut rng) = setup();
        let before = registry.clone();
        let outcome = controller.handle_click(
            0.0,
            0.0,
            VIEWPORT,
            &camera_over_object_zero(),
            &mut registry,
            &mut timeline,
            &mut rng,
            Instant::now(),
        );
        assert_eq!(outcome.selected, None);
        assert_eq!(outcome.tooltip, None);
        assert_eq!(controller.active(), None);
        assert!(timeline.is_empty());
        for (a, b) in registry.iter().zip(before.iter()) {
            assert_eq!(a.current_color, b.current_color);
        }
    }

    #[test]
    fn click_on_object_highlights_and_starts_tween() {
        let (mut controller, mut registry, mut timeline, mut rng) = setup();
        let colors = ColorOptions::default();
        let outcome = controller.handle_click(
            400.0,
            300.0,
            VIEWPORT,
            &camera_over_object_zero(),
            &mut registry,
            &mut timeline,
            &mut rng,
            Instant::now(),
        );
        assert_eq!(outcome.selected, Some(0));
        assert_eq!(controller.active(), Some(0));
        assert_eq!(
            registry.get(0).map(|o| o.current_color),
            Some(colors.highlight)
        );

        let tween = timeline.tween_for(0).cloned();
        let tween = tween.unwrap();
        assert_eq!(tween.target(), Vec3::new(0.0, 0.0, 25.0));
        assert!(tween.duration() >= Duration::from_millis(1000));
        assert!(tween.duration() < Duration::from_millis(2000));
    }

    #[test]
    fn tooltip_carries_normalized_coordinates() {
        let (mut controller, mut registry, mut timeline, mut rng) = setup();
        let outcome = controller.handle_click(
            400.0,
            300.0,
            VIEWPORT,
            &camera_over_object_zero(),
            &mut registry,
            &mut timeline,
            &mut rng,
            Instant::now(),
        );
        let tooltip = outcome.tooltip.unwrap();
        assert_eq!(tooltip.text, "x = 0.000\ny = 0.000");
        assert_eq!(tooltip.x, 410.0);
        assert_eq!(tooltip.y, 310.0);
    }

    #[test]
    fn previous_selection_resets_before_the_new_one_applies() {
        let (mut controller, mut registry, mut timeline, mut rng) = setup();
        let colors = ColorOptions::default();
        let camera = camera_over_object_zero();
        let now = Instant::now();

        let _ = controller.handle_click(
            400.0, 300.0, VIEWPORT, &camera, &mut registry, &mut timeline,
            &mut rng, now,
        );
        assert_eq!(controller.active(), Some(0));

        // Second click misses: the selection must fall back to idle and
        // the old highlight must revert to the inactive color.
        let outcome = controller.handle_click(
            0.0, 0.0, VIEWPORT, &camera, &mut registry, &mut timeline,
            &mut rng, now,
        );
        assert_eq!(outcome.selected, None);
        assert_eq!(outcome.tooltip, None);
        assert_eq!(controller.active(), None);
        assert_eq!(
            registry.get(0).map(|o| o.current_color),
            Some(colors.inactive)
        );
        assert_eq!(highlight_count(&registry, &colors), 0);
    }

    #[test]
    fn at_most_one_object_is_highlighted_across_transitions() {
        let (mut controller, mut registry, mut timeline, mut rng) = setup();
        let colors = ColorOptions::default();
        let camera = camera_over_object_zero();
        let now = Instant::now();

        for (x, y) in [(400.0, 300.0), (0.0, 0.0), (400.0, 300.0), (400.0, 300.0)]
        {
            let _ = controller.handle_click(
                x, y, VIEWPORT, &camera, &mut registry, &mut timeline,
                &mut rng, now,
            );
            assert!(highlight_count(&registry, &colors) <= 1);
        }
    }

    #[test]
    fn only_the_nearest_of_stacked_hits_is_selected() {
        let (mut controller, mut registry, mut timeline, mut rng) = setup();
        let colors = ColorOptions::default();
        // Stack object 1 in front of object 0 along the camera ray.
        if let Some(object) = registry.get_mut(1) {
            object.position = Vec3::new(4.0, 0.0, 5.0);
        }
        let outcome = controller.handle_click(
            400.0,
            300.0,
            VIEWPORT,
            &camera_over_object_zero(),
            &mut registry,
            &mut timeline,
            &mut rng,
            Instant::now(),
        );
        assert_eq!(outcome.selected, Some(1));
        assert_eq!(
            registry.get(0).map(|o| o.current_color),
            Some(colors.base)
        );
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn clear_returns_to_idle_and_restores_color() {
        let (mut controller, mut registry, mut timeline, mut rng) = setup();
        let colors = ColorOptions::default();
        let _ = controller.handle_click(
            400.0,
            300.0,
            VIEWPORT,
            &camera_over_object_zero(),
            &mut registry,
            &mut timeline,
            &mut rng,
            Instant::now(),
        );
        controller.clear(&mut registry);
        assert_eq!(controller.active(), None);
        assert_eq!(
            registry.get(0).map(|o| o.current_color),
            Some(colors.inactive)
        );
    }

    #[test]
    fn hidden_group_clicks_act_like_empty_space() {
        let (mut controller, mut registry, mut timeline, mut rng) = setup();
        registry.group_visible = false;
        let outcome = controller.handle_click(
            400.0,
            300.0,
            VIEWPORT,
            &camera_over_object_zero(),
            &mut registry,
            &mut timeline,
            &mut rng,
            Instant::now(),
        );
        assert_eq!(outcome.selected, None);
        assert_eq!(outcome.tooltip, None);
        assert!(timeline.is_empty());
    }
}
