//! Player viewpoint: input-driven movement plus vertical terrain physics.
//!
//! The controller *owns* a [`Camera`](crate::camera::Camera) rather than
//! extending one — the physics state tests against a bare height field
//! with no camera in sight, and the camera stays physics-agnostic.

/// Per-frame controller wiring input, physics, and the camera.
pub mod controller;
/// Grounded/airborne vertical state machine.
pub mod physics;

pub use controller::PlayerController;
pub use physics::VerticalPhysics;
