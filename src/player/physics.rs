use crate::options::PhysicsOptions;

/// Vertical physics over a height field: a two-state machine, Grounded and
/// Airborne.
///
/// Velocity sign convention: **positive pulls the viewpoint down**. A jump
/// therefore sets `velocity = -jump_impulse`, and the airborne integration
/// is `velocity += gravity * dt; y -= velocity * dt`.
///
/// While grounded the eye is pinned to `ground + height_offset` exactly —
/// a snap, not a spring — which is the binding contract consumers can rely
/// on (never a drifting approximation of it).
#[derive(Debug, Clone)]
pub struct VerticalPhysics {
    velocity: f32,
    airborne: bool,
    gravity: f32,
    jump_impulse: f32,
    height_offset: f32,
}

impl VerticalPhysics {
    /// Create a grounded, at-rest state from the physics options.
    #[must_use]
    pub fn new(options: &PhysicsOptions) -> Self {
        Self {
            velocity: 0.0,
            airborne: false,
            gravity: options.gravity,
            jump_impulse: options.jump_impulse,
            height_offset: options.height_offset,
        }
    }

    /// Eye clearance above the terrain surface while grounded.
    #[must_use]
    pub fn height_offset(&self) -> f32 {
        self.height_offset
    }

    /// Whether the viewpoint is currently airborne.
    #[must_use]
    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    /// Current vertical velocity (positive = downward).
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Begin a jump. No effect while already airborne; returns whether the
    /// impulse fired.
    pub fn try_jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.velocity = -self.jump_impulse;
        true
    }

    /// Advance one frame and return the new eye height.
    ///
    /// Grounded returns `ground_height + height_offset` exactly. Airborne
    /// integrates gravity, then lands — snap to target, velocity reset —
    /// once the eye reaches the target height. A zero `dt` changes
    /// nothing in either state.
    pub fn step(&mut self, y: f32, ground_height: f32, dt: f32) -> f32 {
        let target = ground_height + self.height_offset;
        if !self.airborne {
            return target;
        }
        if dt <= 0.0 {
            return y;
        }

        self.velocity += self.gravity * dt;
        let y = y - self.velocity * dt;
        if y <= target {
            self.velocity = 0.0;
            self.airborne = false;
            return target;
        }
        y
    }
}
