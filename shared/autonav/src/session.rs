use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Autonav state for one vehicle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Session {
    #[default]
    Inactive,
    /// Flying at the selected jump point.
    JumpApproaching,
    /// Stopping near the selected jump point.
    JumpBraking,
    /// Flying at a fixed point in the current region.
    PositionApproaching { target: Vector2<f64> },
}

impl Session {
    pub fn is_active(&self) -> bool {
        !matches!(self, Session::Inactive)
    }

    pub fn is_jump(&self) -> bool {
        matches!(self, Session::JumpApproaching | Session::JumpBraking)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Session::Inactive => "inactive",
            Session::JumpApproaching => "jump_approaching",
            Session::JumpBraking => "jump_braking",
            Session::PositionApproaching { .. } => "position_approaching",
        }
    }
}
