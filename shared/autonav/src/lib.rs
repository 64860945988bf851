//! Autonomous navigation for a player-controlled vehicle.
//!
//! The controller never touches the vehicle directly. Each call reads a
//! [`VehicleState`] snapshot and returns [`Directives`] for the simulation to
//! apply: thrust on/off, a desired bearing, jump requests and notices.
pub mod actuator;
pub mod autonav;
pub mod command;
pub mod config;
pub mod error;
pub mod math;
pub mod notice;
pub mod predictor;
pub mod session;
pub mod vehicle;

pub use autonav::Autonav;
pub use command::{Command, Directives, Outcome, WindowId};
pub use config::AutonavConfig;
pub use error::AutonavError;
pub use notice::{Notice, Severity};
pub use session::Session;
pub use vehicle::{JumpPoint, JumpPointId, Kinematics, Region, VehicleFlags, VehicleState};
