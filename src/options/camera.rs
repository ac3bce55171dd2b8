use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and orientation-clamp parameters.
///
/// The projection values are read once at camera construction and fixed
/// thereafter.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    #[schemars(skip)]
    pub aspect: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Pitch clamp bound in degrees. Strictly below 90 so the view basis
    /// reconstruction can never degenerate at straight up/down.
    #[schemars(title = "Pitch Limit", range(min = 30.0, max = 89.9), extend("step" = 0.1))]
    pub pitch_max_degrees: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 50.0,
            aspect: 16.0 / 9.0,
            znear: 0.1,
            zfar: 2000.0,
            pitch_max_degrees: 89.0,
        }
    }
}
