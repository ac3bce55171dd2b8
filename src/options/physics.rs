use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Physics", inline)]
#[serde(default)]
/// Vertical physics parameters.
pub struct PhysicsOptions {
    /// Gravity acceleration in world units per second squared.
    #[schemars(title = "Gravity", range(min = 5.0, max = 100.0), extend("step" = 1.0))]
    pub gravity: f32,
    /// Upward velocity applied on jump, in world units per second.
    #[schemars(title = "Jump Impulse", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub jump_impulse: f32,
    /// Eye clearance above the terrain surface while grounded.
    #[schemars(title = "Eye Height", range(min = 0.5, max = 5.0), extend("step" = 0.1))]
    pub height_offset: f32,
}

impl Default for PhysicsOptions {
    fn default() -> Self {
        Self {
            gravity: 30.0,
            jump_impulse: 9.0,
            height_offset: 2.0,
        }
    }
}
