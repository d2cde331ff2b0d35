//! Display toggles and viewport parameters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Display toggles and viewport parameters.
pub struct DisplayOptions {
    /// Scene clear color (linear RGB).
    pub background: [f32; 3],
    /// Whether the pickable group starts visible.
    pub group_visible: bool,
    /// Initial X scale of the torus knot (slider range 0..=5).
    pub knot_scale_x: f32,
    /// Upper bound applied to the device pixel ratio.
    pub max_pixel_ratio: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            // Warm off-white, 0xFCF3E3.
            background: [0.988, 0.953, 0.890],
            group_visible: true,
            knot_scale_x: 1.0,
            max_pixel_ratio: 6.0,
        }
    }
}
