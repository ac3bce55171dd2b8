//! Centralized controller options with TOML preset support.
//!
//! All tweakable settings (projection, movement speed, mouse sensitivity,
//! vertical physics, keybindings) are consolidated here. Options serialize
//! to/from TOML for presets, and the UI-exposed tunables carry a JSON
//! Schema for settings panels.

mod camera;
mod keybindings;
mod movement;
mod physics;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeyBindings;
pub use movement::MovementOptions;
pub use physics::PhysicsOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::StriderError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[physics]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and pitch-clamp parameters.
    pub camera: CameraOptions,
    /// Movement speed and mouse sensitivity.
    pub movement: MovementOptions,
    /// Gravity, jump, and grounded-clearance parameters.
    pub physics: PhysicsOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, StriderError> {
        let content = std::fs::read_to_string(path).map_err(StriderError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| StriderError::OptionsParse(e.to_string()))?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), StriderError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StriderError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StriderError::Io)?;
        }
        std::fs::write(path, content).map_err(StriderError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
