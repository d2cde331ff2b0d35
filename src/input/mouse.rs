//! Mouse position tracking and the click/double-click state machine.

use glam::Vec2;
use web_time::{Duration, Instant};

/// Two releases within this window count as a double-click.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(400);

/// Result of processing a mouse-up event through the click state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickResult {
    /// No selection action (the press was a drag).
    NoAction,
    /// Single click at the release position.
    Click {
        /// Horizontal release position in physical pixels.
        x: f32,
        /// Vertical release position in physical pixels.
        y: f32,
    },
    /// Second click of a double-click pair — toggle fullscreen.
    DoubleClick {
        /// Horizontal release position in physical pixels.
        x: f32,
        /// Vertical release position in physical pixels.
        y: f32,
    },
}

/// Tracks cursor position, drag state, and double-click timing.
#[derive(Debug)]
pub struct InputState {
    /// Last reported cursor position in physical pixels.
    pub mouse_pos: Vec2,
    /// Whether significant movement occurred during the current press.
    pub is_dragging: bool,
    last_click_time: Option<Instant>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Create a new input state with no pending click.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            is_dragging: false,
            last_click_time: None,
        }
    }

    /// Record a primary-button press.
    pub fn handle_mouse_down(&mut self) {
        self.is_dragging = false;
    }

    /// Mark that a drag occurred (significant movement while pressed).
    pub fn mark_dragging(&mut self) {
        self.is_dragging = true;
    }

    /// Update the cursor position, returning the delta from the previous
    /// position.
    pub fn handle_mouse_position(&mut self, x: f32, y: f32) -> Vec2 {
        let current = Vec2::new(x, y);
        let delta = current - self.mouse_pos;
        self.mouse_pos = current;
        delta
    }

    /// Process a primary-button release and return what kind of click
    /// happened.
    ///
    /// A release after a drag produces [`ClickResult::NoAction`] and also
    /// breaks any double-click chain.
    pub fn process_mouse_up(&mut self, now: Instant) -> ClickResult {
        let was_dragging = self.is_dragging;
        self.is_dragging = false;

        if was_dragging {
            self.last_click_time = None;
            return ClickResult::NoAction;
        }

        let (x, y) = (self.mouse_pos.x, self.mouse_pos.y);
        let is_double = self
            .last_click_time
            .is_some_and(|last| {
                now.saturating_duration_since(last) < DOUBLE_CLICK_THRESHOLD
            });

        if is_double {
            // Consume the pair so a triple-click starts a fresh chain.
            self.last_click_time = None;
            ClickResult::DoubleClick { x, y }
        } else {
            self.last_click_time = Some(now);
            ClickResult::Click { x, y }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_second_release_is_a_double_click() {
        let mut state = InputState::new();
        let now = Instant::now();
        let _ = state.handle_mouse_position(100.0, 50.0);

        state.handle_mouse_down();
        assert_eq!(
            state.process_mouse_up(now),
            ClickResult::Click { x: 100.0, y: 50.0 }
        );

        state.handle_mouse_down();
        assert_eq!(
            state.process_mouse_up(now + Duration::from_millis(200)),
            ClickResult::DoubleClick { x: 100.0, y: 50.0 }
        );
    }

    #[test]
    fn slow_second_release_is_another_single_click() {
        let mut state = InputState::new();
        let now = Instant::now();

        state.handle_mouse_down();
        let _ = state.process_mouse_up(now);

        state.handle_mouse_down();
        assert!(matches!(
            state.process_mouse_up(now + Duration::from_millis(600)),
            ClickResult::Click { .. }
        ));
    }

    #[test]
    fn triple_click_starts_a_fresh_chain() {
        let mut state = InputState::new();
        let now = Instant::now();

        state.handle_mouse_down();
        let _ = state.process_mouse_up(now);
        state.handle_mouse_down();
        let second = state.process_mouse_up(now + Duration::from_millis(100));
        assert!(matches!(second, ClickResult::DoubleClick { .. }));

        state.handle_mouse_down();
        let third = state.process_mouse_up(now + Duration::from_millis(200));
        assert!(matches!(third, ClickResult::Click { .. }));
    }

    #[test]
    fn dragging_suppresses_the_click_and_breaks_the_chain() {
        let mut state = InputState::new();
        let now = Instant::now();

        state.handle_mouse_down();
        state.mark_dragging();
        assert_eq!(state.process_mouse_up(now), ClickResult::NoAction);

        // The next release is a plain click, not a double.
        state.handle_mouse_down();
        assert!(matches!(
            state.process_mouse_up(now + Duration::from_millis(100)),
            ClickResult::Click { .. }
        ));
    }

    #[test]
    fn position_deltas_accumulate_from_the_last_report() {
        let mut state = InputState::new();
        let _ = state.handle_mouse_position(10.0, 10.0);
        let delta = state.handle_mouse_position(13.0, 6.0);
        assert_eq!(delta, Vec2::new(3.0, -4.0));
        assert_eq!(state.mouse_pos, Vec2::new(13.0, 6.0));
    }
}
