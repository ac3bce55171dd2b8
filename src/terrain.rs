//! Terrain height-field seam.
//!
//! The controller never owns terrain data; it consults an externally
//! provided [`HeightField`] for the surface elevation under the viewpoint.

use crate::error::StriderError;

/// External terrain surface query.
///
/// Implementations must be pure and deterministic within a frame: the same
/// `(x, z)` yields the same height. The controller samples at most once per
/// [`update`](crate::player::PlayerController::update) call, before any
/// horizontal movement, so physics and movement stay deterministic within
/// one tick.
///
/// A failing query must return `Err` rather than a guessed height; the
/// controller propagates the failure untouched.
pub trait HeightField {
    /// Terrain surface elevation at the given horizontal position.
    fn height_at(&self, x: f32, z: f32) -> Result<f32, StriderError>;
}

/// Infallible closures are height fields.
impl<F> HeightField for F
where
    F: Fn(f32, f32) -> f32,
{
    fn height_at(&self, x: f32, z: f32) -> Result<f32, StriderError> {
        Ok(self(x, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_height_fields() {
        let flat = |_: f32, _: f32| 7.5;
        assert_eq!(flat.height_at(1.0, 2.0).unwrap(), 7.5);

        let slope = |x: f32, z: f32| x + z;
        assert_eq!(slope.height_at(3.0, 4.0).unwrap(), 7.0);
    }
}
