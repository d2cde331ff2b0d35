//! Configurable keyboard bindings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ToggleGroup` → `"KeyG"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::ResetCamera, "KeyQ".into()),
            (KeyAction::ToggleGroup, "KeyG".into()),
            (KeyAction::KnotScaleUp, "BracketRight".into()),
            (KeyAction::KnotScaleDown, "BracketLeft".into()),
            (KeyAction::Cancel, "Escape".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    ///
    /// Key strings use the `winit::keyboard::KeyCode` debug format:
    /// `"KeyG"`, `"Escape"`, `"BracketRight"`, etc.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_resolve_after_reverse_map_build() {
        let opts = KeybindingOptions::default();
        assert_eq!(opts.lookup("KeyG"), Some(KeyAction::ToggleGroup));
        assert_eq!(opts.lookup("Escape"), Some(KeyAction::Cancel));
        assert_eq!(opts.lookup("KeyZ"), None);
    }

    #[test]
    fn deserialized_bindings_need_an_explicit_rebuild() {
        let toml_str = r#"
            [bindings]
            toggle_group = "KeyV"
        "#;
        let mut opts: KeybindingOptions =
            toml::from_str(toml_str).unwrap();
        assert_eq!(opts.lookup("KeyV"), None);
        opts.rebuild_reverse_map();
        assert_eq!(opts.lookup("KeyV"), Some(KeyAction::ToggleGroup));
    }
}
