//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (display, colors, camera, keybindings) are
//! consolidated here. Options serialize to/from TOML so a preset file can
//! be passed on the command line; missing fields use defaults.

mod camera;
mod colors;
mod display;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};

use crate::error::CurioError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[colors]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Display toggles and viewport parameters.
    pub display: DisplayOptions,
    /// Color palette options.
    pub colors: ColorOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CurioError::Io`] if the file cannot be read and
    /// [`CurioError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, CurioError> {
        let content = std::fs::read_to_string(path).map_err(CurioError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| CurioError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`CurioError::OptionsParse`] on serialization failure and
    /// [`CurioError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CurioError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CurioError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CurioError::Io)?;
        }
        std::fs::write(path, content).map_err(CurioError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let mut parsed: Options = toml::from_str(&toml_str).unwrap();
        parsed.keybindings.rebuild_reverse_map();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_remaining_defaults() {
        let toml_str = r#"
            [display]
            group_visible = false

            [colors]
            highlight = [1.0, 0.0, 0.0]
        "#;
        let parsed: Options = toml::from_str(toml_str).unwrap();
        assert!(!parsed.display.group_visible);
        assert_eq!(parsed.colors.highlight, [1.0, 0.0, 0.0]);
        // Untouched sections keep their defaults.
        assert_eq!(parsed.colors.base, ColorOptions::default().base);
        assert_eq!(parsed.camera, CameraOptions::default());
        assert_eq!(parsed.display.max_pixel_ratio, 6.0);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let parsed: Options = toml::from_str("").unwrap();
        assert_eq!(parsed.display, DisplayOptions::default());
        assert_eq!(parsed.colors, ColorOptions::default());
    }
}
