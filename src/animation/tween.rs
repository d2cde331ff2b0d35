//! A single position tween with a randomized duration.

use glam::Vec3;
use rand::Rng;
use web_time::{Duration, Instant};

use super::easing::EasingFunction;

/// Inclusive lower bound of the randomized tween duration, milliseconds.
const DURATION_MIN_MS: u64 = 1000;

/// Exclusive upper bound of the randomized tween duration, milliseconds.
const DURATION_MAX_MS: u64 = 2000;

/// Time-based interpolation of one object's position toward a target.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Identifier of the registry object being moved.
    pub object: usize,
    start: Vec3,
    target: Vec3,
    started: Instant,
    duration: Duration,
    easing: EasingFunction,
}

impl Tween {
    /// Create a tween from `start` to `target` beginning at `started`.
    #[must_use]
    pub fn new(
        object: usize,
        start: Vec3,
        target: Vec3,
        started: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            object,
            start,
            target,
            started,
            duration,
            easing,
        }
    }

    /// Draw a duration uniformly from [1000, 2000) milliseconds.
    pub fn randomized_duration<R: Rng + ?Sized>(rng: &mut R) -> Duration {
        Duration::from_millis(
            rng.random_range(DURATION_MIN_MS..DURATION_MAX_MS),
        )
    }

    /// Raw progress of this tween in [0, 1].
    #[inline]
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated position at `now`, eased.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Vec3 {
        let t = self.easing.evaluate(self.progress(now));
        self.start + (self.target - self.start) * t
    }

    /// Whether the tween has reached its end.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// The destination position.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// The total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn tween(duration_ms: u64) -> Tween {
        Tween::new(
            0,
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 25.0),
            Instant::now(),
            Duration::from_millis(duration_ms),
            EasingFunction::Linear,
        )
    }

    #[test]
    fn sample_reaches_the_exact_target_at_completion() {
        let t = tween(100);
        let end = Instant::now() + Duration::from_millis(500);
        assert!(t.is_complete(end));
        assert_eq!(t.sample(end), Vec3::new(0.0, 0.0, 25.0));
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let t = tween(0);
        assert!(t.is_complete(Instant::now()));
    }

    #[test]
    fn progress_saturates_before_the_start_instant() {
        let t = Tween::new(
            0,
            Vec3::ZERO,
            Vec3::ONE,
            Instant::now() + Duration::from_secs(10),
            Duration::from_secs(1),
            EasingFunction::Linear,
        );
        assert_eq!(t.progress(Instant::now()), 0.0);
        assert_eq!(t.sample(Instant::now()), Vec3::ZERO);
    }

    #[test]
    fn randomized_durations_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let d = Tween::randomized_duration(&mut rng);
            assert!(d >= Duration::from_millis(1000));
            assert!(d < Duration::from_millis(2000));
        }
    }
}
