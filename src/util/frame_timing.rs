//! Frame timing with smoothed FPS calculation.

use web_time::Instant;

/// Tracks per-frame elapsed time and exposes a smoothed FPS figure.
pub struct FrameTiming {
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using an exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a new frame timer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Reasonable starting display value.
            smoothing: 0.05,
        }
    }

    /// Call after rendering each frame to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display.
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_moves_toward_the_instantaneous_rate() {
        let mut timing = FrameTiming::new();
        let initial = timing.fps();
        std::thread::sleep(std::time::Duration::from_millis(30));
        timing.end_frame();
        // ~33 FPS frames should pull the average below the 60 FPS seed.
        assert!(timing.fps() < initial);
        assert!(timing.fps() > 0.0);
    }
}
