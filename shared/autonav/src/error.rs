use crate::notice::Notice;

/// Reasons autonav refuses to start or stops early.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum AutonavError {
    #[error("Not enough fuel for autonav to continue")]
    NoFuel { required: f64, available: f64 },

    #[error("No jump target selected")]
    NoTarget,

    #[error("Vehicle is under manual control")]
    ManualControl,

    #[error("Vehicle cannot maneuver")]
    Immobile,

    #[error("Missile Lockon Detected")]
    LockOnDetected,

    #[error("Target changed to current system")]
    TargetChanged,

    /// Cancelled by the caller, optionally with a reason to show.
    #[error("{}", .0.as_deref().unwrap_or("Aborted"))]
    Aborted(Option<String>),
}

impl AutonavError {
    /// Notice shown when a start request is refused for this reason.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            AutonavError::NoFuel { .. } => {
                Some(Notice::error("Not enough fuel to jump for autonav."))
            }
            AutonavError::Immobile => Some(Notice::error(
                "Autonav unavailable: vehicle cannot maneuver.",
            )),
            _ => None,
        }
    }
}
