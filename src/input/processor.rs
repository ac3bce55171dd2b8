//! Converts raw platform events into per-frame input snapshots.
//!
//! The `InputProcessor` owns all transient input state (held keys, the
//! jump latch, accumulated mouse motion) and the key-binding map. It is
//! the only thing that sits between raw window events and
//! [`PlayerController::update`](crate::player::PlayerController::update).

use std::collections::HashSet;

use glam::Vec2;

use super::event::{InputEvent, MouseButton, PlayerAction};
use super::snapshot::InputSnapshot;
use crate::options::KeyBindings;

/// Pointer action routed to an external interaction handler.
///
/// The controller core does not interpret these — whatever sits behind a
/// click (voxel editing, object picking) lives outside. They are surfaced
/// verbatim from button press edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Primary pointer action (left button press).
    Primary,
    /// Secondary pointer action (right button press).
    Secondary,
}

/// Folds raw window events into per-frame [`InputSnapshot`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(interaction) = processor.handle_event(&event) {
///     world.handle_interaction(interaction);
/// }
///
/// // Once per frame:
/// player.update(dt, &processor.take_snapshot(), &terrain)?;
/// ```
pub struct InputProcessor {
    /// Key string → action mapping.
    bindings: KeyBindings,
    /// Actions whose keys are currently held.
    held: HashSet<PlayerAction>,
    /// Jump press edge, pending until the next snapshot.
    jump_latched: bool,
    /// Mouse motion accumulated since the last snapshot.
    mouse_delta: Vec2,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bindings(KeyBindings::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
            jump_latched: false,
            mouse_delta: Vec2::ZERO,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Process one raw event.
    ///
    /// Pointer button presses come back as [`Interaction`]s for the
    /// external handler; everything else accumulates into the next
    /// snapshot. Unbound keys are ignored.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<Interaction> {
        match event {
            InputEvent::Key { code, pressed } => {
                if let Some(action) = self.bindings.lookup(code) {
                    if *pressed {
                        // OS key repeat re-sends presses while held;
                        // `insert` returning false filters them so jump
                        // latches once per physical press.
                        if self.held.insert(action)
                            && action == PlayerAction::Jump
                        {
                            self.jump_latched = true;
                        }
                    } else {
                        let _ = self.held.remove(&action);
                    }
                }
                None
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.mouse_delta += Vec2::new(*dx, *dy);
                None
            }
            InputEvent::MouseButton { button, pressed } => {
                if !pressed {
                    return None;
                }
                match button {
                    MouseButton::Left => Some(Interaction::Primary),
                    MouseButton::Right => Some(Interaction::Secondary),
                    MouseButton::Middle => None,
                }
            }
        }
    }

    /// Drain this frame's accumulated input.
    ///
    /// Movement flags reflect the keys held right now; the jump edge and
    /// the mouse delta reset so the next frame starts clean. Call exactly
    /// once per frame.
    pub fn take_snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            forward: self.held.contains(&PlayerAction::MoveForward),
            back: self.held.contains(&PlayerAction::MoveBack),
            left: self.held.contains(&PlayerAction::StrafeLeft),
            right: self.held.contains(&PlayerAction::StrafeRight),
            jump: self.jump_latched,
            mouse_delta: self.mouse_delta,
        };
        self.jump_latched = false;
        self.mouse_delta = Vec2::ZERO;
        snapshot
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.into(),
            pressed,
        }
    }

    #[test]
    fn held_keys_are_level_triggered() {
        let mut processor = InputProcessor::new();
        assert!(processor.handle_event(&key("KeyW", true)).is_none());

        let first = processor.take_snapshot();
        let second = processor.take_snapshot();
        assert!(first.forward && second.forward);

        assert!(processor.handle_event(&key("KeyW", false)).is_none());
        assert!(!processor.take_snapshot().forward);
    }

    #[test]
    fn jump_is_edge_triggered() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(&key("Space", true));

        assert!(processor.take_snapshot().jump);
        // Still held, but the edge fired already
        assert!(!processor.take_snapshot().jump);

        // OS key repeat must not re-latch
        let _ = processor.handle_event(&key("Space", true));
        assert!(!processor.take_snapshot().jump);

        // Release and press again: a fresh edge
        let _ = processor.handle_event(&key("Space", false));
        let _ = processor.handle_event(&key("Space", true));
        assert!(processor.take_snapshot().jump);
    }

    #[test]
    fn mouse_motion_accumulates_then_resets() {
        let mut processor = InputProcessor::new();
        let _ = processor
            .handle_event(&InputEvent::MouseMotion { dx: 3.0, dy: -1.0 });
        let _ = processor
            .handle_event(&InputEvent::MouseMotion { dx: 2.0, dy: 4.0 });

        assert_eq!(processor.take_snapshot().mouse_delta, Vec2::new(5.0, 3.0));
        assert_eq!(processor.take_snapshot().mouse_delta, Vec2::ZERO);
    }

    #[test]
    fn pointer_presses_route_as_interactions() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_event(&InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            }),
            Some(Interaction::Primary)
        );
        assert_eq!(
            processor.handle_event(&InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true,
            }),
            Some(Interaction::Secondary)
        );
        // Releases and middle clicks are not interactions
        assert!(processor
            .handle_event(&InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            })
            .is_none());
        assert!(processor
            .handle_event(&InputEvent::MouseButton {
                button: MouseButton::Middle,
                pressed: true,
            })
            .is_none());
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(&key("KeyZ", true));
        assert_eq!(processor.take_snapshot(), InputSnapshot::idle());
    }
}
