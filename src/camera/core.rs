use glam::{Mat4, Vec3};

use crate::options::CameraOptions;
use crate::util::angles::wrap_angle;

/// World up axis. Roll is never introduced, so `right` (a cross product
/// against this axis) stays horizontal.
const WORLD_UP: Vec3 = Vec3::Y;

/// First-person camera pose with derived basis vectors and transforms.
///
/// `forward`/`right`/`up` and the view matrix are derived state, rebuilt
/// from `yaw`/`pitch` by [`refresh`](Self::refresh) — they are never the
/// source of truth. The projection matrix is fixed at construction (no
/// resize handling).
///
/// Rendering and culling consumers read the pose through the accessors and
/// must treat it as read-only; only the owning controller mutates it.
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    pitch_max: f32,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    view: Mat4,
    projection: Mat4,
    fovy: f32,
    aspect: f32,
}

impl Camera {
    /// Create a camera at `position` looking along the given yaw/pitch
    /// (degrees), with the projection built once from `options`.
    #[must_use]
    pub fn new(
        position: Vec3,
        yaw_degrees: f32,
        pitch_degrees: f32,
        options: &CameraOptions,
    ) -> Self {
        let pitch_max = options.pitch_max_degrees.to_radians();
        let mut camera = Self {
            position,
            yaw: wrap_angle(yaw_degrees.to_radians()),
            pitch: pitch_degrees.to_radians().clamp(-pitch_max, pitch_max),
            pitch_max,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: WORLD_UP,
            view: Mat4::IDENTITY,
            projection: Mat4::perspective_rh(
                options.fovy.to_radians(),
                options.aspect,
                options.znear,
                options.zfar,
            ),
            fovy: options.fovy,
            aspect: options.aspect,
        };
        camera.refresh();
        camera
    }

    /// Rebuild the basis vectors from yaw/pitch, then the view matrix.
    ///
    /// Call exactly once per frame, after all position/angle mutation for
    /// that frame. Calling mid-frame leaves a transiently stale pose that
    /// the final call corrects; external consumers must only read after the
    /// last call of the frame.
    pub fn refresh(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        self.forward = Vec3::new(
            cos_yaw * cos_pitch,
            sin_pitch,
            sin_yaw * cos_pitch,
        )
        .normalize();
        // pitch is clamped strictly inside ±90°, so forward is never
        // parallel to WORLD_UP and these normalizations cannot degenerate
        self.right = self.forward.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.forward).normalize();

        self.view = Mat4::look_at_rh(
            self.position,
            self.position + self.forward,
            self.up,
        );
    }

    /// Tilt the view. Positive `delta` looks down (window coordinates grow
    /// downward, matching raw mouse motion). Clamped to the configured
    /// pitch bound.
    pub fn rotate_pitch(&mut self, delta: f32) {
        self.pitch = (self.pitch - delta).clamp(-self.pitch_max, self.pitch_max);
    }

    /// Turn the view. Positive `delta` turns toward +yaw; unclamped, but
    /// wrapped to `[-PI, PI)`.
    pub fn rotate_yaw(&mut self, delta: f32) {
        self.yaw = wrap_angle(self.yaw + delta);
    }

    /// Move along the forward vector. `forward` carries the pitch's
    /// vertical component: walking forward while looking up gains altitude.
    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.forward * distance;
    }

    /// Move against the forward vector.
    pub fn move_back(&mut self, distance: f32) {
        self.position -= self.forward * distance;
    }

    /// Strafe left. `right` is horizontal, so strafing never changes
    /// altitude.
    pub fn move_left(&mut self, distance: f32) {
        self.position -= self.right * distance;
    }

    /// Strafe right.
    pub fn move_right(&mut self, distance: f32) {
        self.position += self.right * distance;
    }

    /// Yaw in radians, wrapped to `[-PI, PI)`.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in radians, always within the configured clamp.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit forward vector as of the last [`refresh`](Self::refresh).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Unit right vector as of the last [`refresh`](Self::refresh).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit up vector as of the last [`refresh`](Self::refresh).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// View matrix as of the last [`refresh`](Self::refresh).
    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// Projection matrix, fixed at construction.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer layout holding the frame's pose snapshot.
///
/// This is the hand-off artifact for multi-threaded renderers: copy one of
/// these after the frame's update instead of sharing the [`Camera`] across
/// threads.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 50.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.view_projection().to_cols_array_2d();
        self.position = camera.position.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.forward.to_array();
        self.fovy = camera.fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn camera_at(yaw_degrees: f32, pitch_degrees: f32) -> Camera {
        Camera::new(
            Vec3::ZERO,
            yaw_degrees,
            pitch_degrees,
            &CameraOptions::default(),
        )
    }

    #[test]
    fn basis_is_orthonormal_across_angle_sweep() {
        for yaw in (-180..=180).step_by(30) {
            for pitch in (-85..=85).step_by(17) {
                let camera = camera_at(yaw as f32, pitch as f32);
                assert!((camera.forward().length() - 1.0).abs() < EPS);
                assert!((camera.right().length() - 1.0).abs() < EPS);
                assert!((camera.up().length() - 1.0).abs() < EPS);
                assert!(camera.forward().dot(camera.right()).abs() < EPS);
                assert!(camera.forward().dot(camera.up()).abs() < EPS);
                assert!(camera.right().dot(camera.up()).abs() < EPS);
            }
        }
    }

    #[test]
    fn yaw_minus_ninety_faces_negative_z() {
        let camera = camera_at(-90.0, 0.0);
        assert!((camera.forward() - Vec3::NEG_Z).length() < EPS);
        assert!((camera.right() - Vec3::X).length() < EPS);
    }

    #[test]
    fn pitch_never_escapes_clamp() {
        let mut camera = camera_at(0.0, 0.0);
        let max = CameraOptions::default().pitch_max_degrees.to_radians();

        camera.rotate_pitch(1.0e6);
        assert!((camera.pitch() + max).abs() < EPS);
        camera.rotate_pitch(-1.0e6);
        assert!((camera.pitch() - max).abs() < EPS);
        for _ in 0..1000 {
            camera.rotate_pitch(-0.3);
        }
        assert!(camera.pitch() <= max + EPS);
        camera.refresh();
        // Even at the bound, the basis must stay well-formed
        assert!((camera.right().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn yaw_wraps_instead_of_growing() {
        let mut camera = camera_at(0.0, 0.0);
        for _ in 0..10_000 {
            camera.rotate_yaw(1.0);
        }
        assert!(camera.yaw().abs() <= std::f32::consts::PI);
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut camera = camera_at(37.0, -12.0);
        camera.refresh();
        let view = camera.view().to_cols_array();
        let forward = camera.forward();
        camera.refresh();
        assert_eq!(camera.view().to_cols_array(), view);
        assert_eq!(camera.forward(), forward);
    }

    #[test]
    fn strafing_stays_horizontal_but_forward_does_not() {
        let mut camera = camera_at(-90.0, 30.0);
        camera.move_left(2.0);
        camera.move_right(5.0);
        assert!(camera.position.y.abs() < EPS);

        camera.move_forward(1.0);
        // Looking up 30°: forward walking gains altitude by design
        assert!((camera.position.y - 30.0_f32.to_radians().sin()).abs() < EPS);
    }

    #[test]
    fn projection_is_fixed_at_construction() {
        let mut camera = camera_at(0.0, 0.0);
        let projection = camera.projection().to_cols_array();
        camera.rotate_yaw(1.0);
        camera.move_forward(10.0);
        camera.refresh();
        assert_eq!(camera.projection().to_cols_array(), projection);
    }

    #[test]
    fn uniform_mirrors_camera_state() {
        let camera = camera_at(45.0, 10.0);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);
        assert_eq!(
            uniform.view_proj,
            camera.view_projection().to_cols_array_2d()
        );
        assert_eq!(uniform.position, camera.position.to_array());
        assert_eq!(uniform.forward, camera.forward().to_array());
    }
}
