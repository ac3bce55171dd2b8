use glam::Vec2;

/// Immutable per-frame input state consumed by
/// [`PlayerController::update`](crate::player::PlayerController::update).
///
/// The four movement flags are level-triggered: they apply every frame the
/// key is held. `jump` is edge-triggered, latched once per press by the
/// [`InputProcessor`](super::InputProcessor).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Walk along the camera forward vector.
    pub forward: bool,
    /// Walk against the camera forward vector.
    pub back: bool,
    /// Strafe along the negated right vector.
    pub left: bool,
    /// Strafe along the right vector.
    pub right: bool,
    /// Jump was freshly pressed this frame.
    pub jump: bool,
    /// Raw mouse motion accumulated over the frame; zero when the mouse
    /// was still. Positive y is downward (window coordinates).
    pub mouse_delta: Vec2,
}

impl InputSnapshot {
    /// Snapshot with no keys held and no mouse motion.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }
}
