//! Small shared utilities.

/// Angle wrapping helpers.
pub mod angles;
/// Frame timing: delta-time production and FPS smoothing.
pub mod frame_timing;
