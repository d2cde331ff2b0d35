//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, mouse
//! gesture, or programmatic call — is represented as a `CurioCommand`.
//! Consumers construct commands and pass them to
//! [`GalleryEngine::execute`](super::GalleryEngine::execute).

use glam::Vec2;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered — keyboard,
/// mouse, or API all look identical:
///
/// ```ignore
/// engine.execute(CurioCommand::ToggleGroupVisible);
/// engine.execute(CurioCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurioCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Orbit the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera focus by `delta` pixels of mouse movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// Restore the initial camera orbit.
    ResetCamera,

    // ── Selection ───────────────────────────────────────────────────
    /// Run the pick/highlight transition for a click at this screen
    /// position.
    SelectAt {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },

    /// Clear the active selection and remove the tooltip.
    ClearSelection,

    // ── Scene ───────────────────────────────────────────────────────
    /// Show/hide the pickable group.
    ToggleGroupVisible,

    /// Nudge the torus knot's X scale (clamped to its slider range).
    AdjustKnotScaleX {
        /// Scale change, positive or negative.
        delta: f32,
    },

    // ── Window ──────────────────────────────────────────────────────
    /// Toggle fullscreen. Handled by the embedding window, not the
    /// engine.
    ToggleFullscreen,
}
