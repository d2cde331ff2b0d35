//! Color palette options.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Scene color palette (linear RGB).
pub struct ColorOptions {
    /// Creation tint of the pickable objects, 0xFF77FF.
    pub base: [f32; 3],
    /// Neutral color applied when a selection is reset.
    pub inactive: [f32; 3],
    /// Highlight applied to the active selection, 0x0077FF.
    pub highlight: [f32; 3],
    /// Solid tint of the torus knot fixture, 0xB2A6D9.
    pub knot: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            base: [1.0, 0.467, 1.0],
            inactive: [0.502, 0.502, 0.502],
            highlight: [0.0, 0.467, 1.0],
            knot: [0.698, 0.651, 0.851],
        }
    }
}
