//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (mouse tracking,
//! drag detection, double-click timing, modifier keys). It is the only
//! thing that sits between raw window events and the engine's
//! [`execute`](crate::engine::GalleryEngine::execute) method.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use super::event::{InputEvent, MouseButton};
use super::mouse::{ClickResult, InputState};
use crate::engine::command::CurioCommand;

/// Movement beyond this squared pixel delta marks a press as a drag.
const DRAG_THRESHOLD_SQ: f32 = 1.0;

/// Step applied to the knot X scale per key press.
const KNOT_SCALE_STEP: f32 = 0.1;

/// Serializable tag for the discrete, parameterless commands that can be
/// key-bound.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Restore the initial camera orbit.
    ResetCamera,
    /// Show/hide the pickable group.
    ToggleGroup,
    /// Grow the torus knot along X.
    KnotScaleUp,
    /// Shrink the torus knot along X.
    KnotScaleDown,
    /// Cancel / clear the active selection.
    Cancel,
}

impl KeyAction {
    /// Convert to the corresponding [`CurioCommand`].
    #[must_use]
    pub fn to_command(self) -> CurioCommand {
        match self {
            Self::ResetCamera => CurioCommand::ResetCamera,
            Self::ToggleGroup => CurioCommand::ToggleGroupVisible,
            Self::KnotScaleUp => CurioCommand::AdjustKnotScaleX {
                delta: KNOT_SCALE_STEP,
            },
            Self::KnotScaleDown => CurioCommand::AdjustKnotScaleX {
                delta: -KNOT_SCALE_STEP,
            },
            Self::Cancel => CurioCommand::ClearSelection,
        }
    }
}

/// Converts raw window events into [`CurioCommand`]s.
///
/// Owns all transient input state (mouse position, drag detection,
/// double-click timing, modifier keys).
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Mouse tracking and click state machine.
    state: InputState,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
}

impl InputProcessor {
    /// Create a new processor with no pending input.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            mouse_pressed: false,
            shift_pressed: false,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.state.mouse_pos
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Option<CurioCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed, now)
            }
            InputEvent::Scroll { delta } => Some(CurioCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    /// Cursor moved — compute delta, possibly produce a camera command.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<CurioCommand> {
        let delta = self.state.handle_mouse_position(x, y);

        if self.mouse_pressed {
            if delta.length_squared() > DRAG_THRESHOLD_SQ {
                self.state.mark_dragging();
            }
            if self.shift_pressed {
                return Some(CurioCommand::PanCamera { delta });
            }
            return Some(CurioCommand::RotateCamera { delta });
        }

        None
    }

    /// Mouse button press/release — track state, produce selection or
    /// fullscreen commands on release.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        now: Instant,
    ) -> Option<CurioCommand> {
        if button != MouseButton::Left {
            return None;
        }

        if pressed {
            self.state.handle_mouse_down();
            self.mouse_pressed = true;
            return None;
        }

        self.mouse_pressed = false;
        match self.state.process_mouse_up(now) {
            ClickResult::NoAction => None,
            ClickResult::Click { x, y } => {
                Some(CurioCommand::SelectAt { x, y })
            }
            ClickResult::DoubleClick { .. } => {
                Some(CurioCommand::ToggleFullscreen)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    fn press() -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        }
    }

    fn release() -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        }
    }

    #[test]
    fn press_release_in_place_selects_at_the_cursor() {
        let mut processor = InputProcessor::new();
        let now = Instant::now();
        let _ = processor
            .handle_event(InputEvent::CursorMoved { x: 120.0, y: 80.0 }, now);
        assert_eq!(processor.handle_event(press(), now), None);
        assert_eq!(
            processor.handle_event(release(), now),
            Some(CurioCommand::SelectAt { x: 120.0, y: 80.0 })
        );
    }

    #[test]
    fn dragging_rotates_instead_of_selecting() {
        let mut processor = InputProcessor::new();
        let now = Instant::now();
        let _ = processor.handle_event(press(), now);
        let cmd = processor
            .handle_event(InputEvent::CursorMoved { x: 30.0, y: 0.0 }, now);
        assert_eq!(
            cmd,
            Some(CurioCommand::RotateCamera {
                delta: Vec2::new(30.0, 0.0)
            })
        );
        assert_eq!(processor.handle_event(release(), now), None);
    }

    #[test]
    fn shift_drag_pans() {
        let mut processor = InputProcessor::new();
        let now = Instant::now();
        let _ = processor
            .handle_event(InputEvent::ModifiersChanged { shift: true }, now);
        let _ = processor.handle_event(press(), now);
        let cmd = processor
            .handle_event(InputEvent::CursorMoved { x: 0.0, y: 10.0 }, now);
        assert!(matches!(cmd, Some(CurioCommand::PanCamera { .. })));
    }

    #[test]
    fn double_click_toggles_fullscreen_once() {
        let mut processor = InputProcessor::new();
        let now = Instant::now();

        let _ = processor.handle_event(press(), now);
        assert!(matches!(
            processor.handle_event(release(), now),
            Some(CurioCommand::SelectAt { .. })
        ));

        let later = now + Duration::from_millis(150);
        let _ = processor.handle_event(press(), later);
        assert_eq!(
            processor.handle_event(release(), later),
            Some(CurioCommand::ToggleFullscreen)
        );
    }

    #[test]
    fn scroll_zooms() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor
                .handle_event(InputEvent::Scroll { delta: 1.5 }, Instant::now()),
            Some(CurioCommand::Zoom { delta: 1.5 })
        );
    }

    #[test]
    fn right_button_is_ignored() {
        let mut processor = InputProcessor::new();
        let now = Instant::now();
        let cmd = processor.handle_event(
            InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            },
            now,
        );
        assert_eq!(cmd, None);
        assert!(!processor.mouse_pressed());
    }
}
