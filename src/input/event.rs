//! Platform-agnostic input events.
//!
//! These are fed into an [`InputProcessor`](super::InputProcessor), which
//! accumulates them into per-frame
//! [`InputSnapshot`](super::InputSnapshot) values.

use serde::{Deserialize, Serialize};

/// Platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key pressed or released.
    Key {
        /// Physical key code in the `winit::keyboard::KeyCode` debug
        /// format: `"KeyW"`, `"Space"`, `"Escape"`.
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Relative mouse motion since the previous motion event.
    MouseMotion {
        /// Horizontal delta in pixels (positive = right).
        dx: f32,
        /// Vertical delta in pixels (positive = down).
        dy: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Movement and jump actions a key can be bound to.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// jump = "Space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    /// Walk along the camera forward vector (level-triggered).
    MoveForward,
    /// Walk against the camera forward vector (level-triggered).
    MoveBack,
    /// Strafe along the negated right vector (level-triggered).
    StrafeLeft,
    /// Strafe along the right vector (level-triggered).
    StrafeRight,
    /// Jump (edge-triggered: acts once per press, only while grounded).
    Jump,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit keyboard event, skipping keys without a physical
    /// key code.
    #[must_use]
    pub fn from_key_event(event: &winit::event::KeyEvent) -> Option<Self> {
        match event.physical_key {
            winit::keyboard::PhysicalKey::Code(code) => Some(Self::Key {
                code: format!("{code:?}"),
                pressed: event.state.is_pressed(),
            }),
            winit::keyboard::PhysicalKey::Unidentified(_) => None,
        }
    }

    /// Convert a winit `DeviceEvent::MouseMotion` delta.
    #[must_use]
    pub fn from_mouse_motion(delta: (f64, f64)) -> Self {
        Self::MouseMotion {
            dx: delta.0 as f32,
            dy: delta.1 as f32,
        }
    }
}
