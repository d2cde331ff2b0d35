//! Timeline managing the set of active tweens.

use web_time::Instant;

use super::tween::Tween;
use crate::scene::SceneRegistry;

/// Holds active tweens, advances them against a caller-supplied clock,
/// and retires them once complete.
#[derive(Debug, Default)]
pub struct TweenTimeline {
    active: Vec<Tween>,
}

impl TweenTimeline {
    /// Create an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Start a tween. A tween already running for the same object is
    /// replaced.
    pub fn start(&mut self, tween: Tween) {
        self.active.retain(|t| t.object != tween.object);
        self.active.push(tween);
    }

    /// Advance all tweens to `now`, writing interpolated positions into
    /// the registry. Completed tweens land exactly on their target and
    /// are removed.
    pub fn advance(&mut self, now: Instant, registry: &mut SceneRegistry) {
        for tween in &self.active {
            if let Some(object) = registry.get_mut(tween.object) {
                object.position = tween.sample(now);
            }
        }
        self.active.retain(|t| !t.is_complete(now));
    }

    /// Number of running tweens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no tweens are running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// The running tween for an object, if any.
    #[must_use]
    pub fn tween_for(&self, object: usize) -> Option<&Tween> {
        self.active.iter().find(|t| t.object == object)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use web_time::Duration;

    use super::*;
    use crate::animation::easing::EasingFunction;

    fn registry() -> SceneRegistry {
        SceneRegistry::build([0.5; 3])
    }

    fn tween_to_backstop(object: usize, started: Instant) -> Tween {
        Tween::new(
            object,
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 25.0),
            started,
            Duration::from_millis(1000),
            EasingFunction::Linear,
        )
    }

    #[test]
    fn advance_writes_positions_and_retires_completed() {
        let started = Instant::now();
        let mut timeline = TweenTimeline::new();
        let mut reg = registry();
        timeline.start(tween_to_backstop(3, started));

        timeline.advance(started + Duration::from_millis(500), &mut reg);
        assert_eq!(timeline.len(), 1);
        let moved = reg.get(3).map(|o| o.position.z);
        assert_eq!(moved, Some(12.5));

        timeline.advance(started + Duration::from_millis(1500), &mut reg);
        assert!(timeline.is_empty());
        assert_eq!(reg.get(3).map(|o| o.position.z), Some(25.0));
    }

    #[test]
    fn starting_again_replaces_the_objects_tween() {
        let started = Instant::now();
        let mut timeline = TweenTimeline::new();
        timeline.start(tween_to_backstop(2, started));
        timeline.start(tween_to_backstop(2, started));
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn tweens_for_distinct_objects_coexist() {
        let started = Instant::now();
        let mut timeline = TweenTimeline::new();
        timeline.start(tween_to_backstop(0, started));
        timeline.start(tween_to_backstop(1, started));
        assert_eq!(timeline.len(), 2);
        assert!(timeline.tween_for(0).is_some());
        assert!(timeline.tween_for(1).is_some());
        assert!(timeline.tween_for(5).is_none());
    }
}
