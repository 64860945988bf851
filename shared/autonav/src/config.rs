use serde::{Deserialize, Serialize};

/// Facing error under which the vehicle is considered aligned (5 degrees).
pub const MIN_DIR_ERR: f64 = 5.0 * std::f64::consts::PI / 180.0;
/// Speed under which the vehicle is considered stopped.
pub const MIN_VEL_ERR: f64 = 5.0;
/// Fuel consumed by a single jump.
pub const HYPERSPACE_FUEL: f64 = 100.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutonavConfig {
    pub min_dir_err: f64,
    pub min_vel_err: f64,
    pub jump_fuel_cost: f64,
    /// Abort on lock-on during point approach too, not only while heading
    /// for a jump.
    pub lockon_abort_all_states: bool,
    /// Time compression requested while autonav runs. 1.0 leaves time alone.
    pub time_compression: f64,
}

impl Default for AutonavConfig {
    fn default() -> Self {
        Self {
            min_dir_err: MIN_DIR_ERR,
            min_vel_err: MIN_VEL_ERR,
            jump_fuel_cost: HYPERSPACE_FUEL,
            lockon_abort_all_states: true,
            time_compression: 1.0,
        }
    }
}

impl AutonavConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
