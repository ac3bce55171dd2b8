use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Movement", inline)]
#[serde(default)]
/// Movement speed and look sensitivity.
pub struct MovementOptions {
    /// Walk speed in world units per second.
    #[schemars(title = "Walk Speed", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub speed: f32,
    /// Mouse look sensitivity in radians per pixel of motion.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub mouse_sensitivity: f32,
}

impl Default for MovementOptions {
    fn default() -> Self {
        Self {
            speed: 10.0,
            mouse_sensitivity: 0.002,
        }
    }
}
