use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::error::StriderError;
use crate::input::InputSnapshot;
use crate::options::Options;
use crate::player::physics::VerticalPhysics;
use crate::terrain::HeightField;

/// First-person player controller.
///
/// Owns the [`Camera`] and the vertical physics state. Each frame,
/// [`update`](Self::update) is a deterministic function of
/// `(state, input snapshot, delta time, height field)` — it polls nothing
/// and holds no references into the outside world.
///
/// Rendering/culling consumers read the pose through
/// [`camera`](Self::camera) and must treat it as read-only; a renderer on
/// another thread should copy a
/// [`CameraUniform`](crate::camera::CameraUniform) instead.
pub struct PlayerController {
    camera: Camera,
    physics: VerticalPhysics,
    speed: f32,
    mouse_sensitivity: f32,
}

impl PlayerController {
    /// Spawn the player standing on the terrain at `spawn_xz`, facing the
    /// given yaw/pitch (degrees).
    ///
    /// Samples the height field once to place the eye at
    /// `ground + height_offset`. A failed query propagates — the spawn
    /// height is never guessed.
    pub fn new(
        options: &Options,
        terrain: &impl HeightField,
        spawn_xz: Vec2,
        yaw_degrees: f32,
        pitch_degrees: f32,
    ) -> Result<Self, StriderError> {
        let physics = VerticalPhysics::new(&options.physics);
        let ground = terrain.height_at(spawn_xz.x, spawn_xz.y)?;
        let position = Vec3::new(
            spawn_xz.x,
            ground + physics.height_offset(),
            spawn_xz.y,
        );
        log::debug!("player spawn at {position}, yaw {yaw_degrees}°");

        Ok(Self {
            camera: Camera::new(
                position,
                yaw_degrees,
                pitch_degrees,
                &options.camera,
            ),
            physics,
            speed: options.movement.speed,
            mouse_sensitivity: options.movement.mouse_sensitivity,
        })
    }

    /// Advance one frame.
    ///
    /// The order is fixed: vertical physics, horizontal movement, jump,
    /// look rotation, then a single [`Camera::refresh`]. The height field
    /// is sampled once, before horizontal movement — never re-sampled
    /// after it — so physics and movement stay deterministic within a
    /// tick (a grounded step onto different terrain re-pins on the next
    /// frame).
    ///
    /// A negative or non-finite `delta_time` is clamped to zero and the
    /// frame proceeds; a failed height query propagates untouched.
    pub fn update(
        &mut self,
        delta_time: f32,
        input: &InputSnapshot,
        terrain: &impl HeightField,
    ) -> Result<(), StriderError> {
        let dt = if delta_time.is_finite() {
            delta_time.max(0.0)
        } else {
            0.0
        };

        let ground = terrain
            .height_at(self.camera.position.x, self.camera.position.z)?;
        self.camera.position.y =
            self.physics.step(self.camera.position.y, ground, dt);

        let step = self.speed * dt;
        if input.forward {
            self.camera.move_forward(step);
        }
        if input.back {
            self.camera.move_back(step);
        }
        if input.left {
            self.camera.move_left(step);
        }
        if input.right {
            self.camera.move_right(step);
        }

        if input.jump && self.physics.try_jump() {
            log::debug!("jump from y {:.2}", self.camera.position.y);
        }

        if input.mouse_delta != Vec2::ZERO {
            self.camera
                .rotate_yaw(input.mouse_delta.x * self.mouse_sensitivity);
            self.camera
                .rotate_pitch(input.mouse_delta.y * self.mouse_sensitivity);
        }

        self.camera.refresh();
        Ok(())
    }

    /// The owned camera pose. Read-only to consumers.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Whether the viewpoint is currently airborne.
    #[must_use]
    pub fn is_airborne(&self) -> bool {
        self.physics.is_airborne()
    }

    /// Current vertical velocity (positive = downward).
    #[must_use]
    pub fn vertical_velocity(&self) -> f32 {
        self.physics.velocity()
    }
}
