use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::PlayerAction;

/// Configurable keyboard bindings mapping actions to physical key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format: `"KeyW"`,
/// `"Space"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    pub bindings: HashMap<PlayerAction, String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            (PlayerAction::MoveForward, "KeyW".into()),
            (PlayerAction::MoveBack, "KeyS".into()),
            (PlayerAction::StrafeLeft, "KeyA".into()),
            (PlayerAction::StrafeRight, "KeyD".into()),
            (PlayerAction::Jump, "Space".into()),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the action bound to a physical key string.
    ///
    /// The map holds a handful of entries, so a linear scan beats keeping
    /// a reverse map coherent across deserialization.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<PlayerAction> {
        self.bindings
            .iter()
            .find_map(|(action, key)| (key == code).then_some(*action))
    }
}
