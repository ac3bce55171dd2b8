//! First-person camera: pose, derived basis vectors, and transforms.
//!
//! The camera is physics-agnostic — pure orientation and translation
//! primitives over a yaw/pitch pose. Vertical physics and input live in
//! [`player`](crate::player).

/// Core camera struct and the GPU pose snapshot.
pub mod core;

pub use core::{Camera, CameraUniform};
