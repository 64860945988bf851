//! The autonav session state machine.
use crate::actuator;
use crate::command::{Command, Directives, Outcome, WindowId};
use crate::config::AutonavConfig;
use crate::error::AutonavError;
use crate::notice::Notice;
use crate::session::Session;
use crate::vehicle::{JumpPoint, Region, VehicleState};
use nalgebra::vector;

#[derive(Clone, Debug, Default)]
pub struct Autonav {
    config: AutonavConfig,
    session: Session,
}

impl Autonav {
    pub fn new(config: AutonavConfig) -> Self {
        Self {
            config,
            session: Session::Inactive,
        }
    }

    pub fn config(&self) -> &AutonavConfig {
        &self.config
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Starts flying towards the selected jump point.
    pub fn start_jump<R: Region + ?Sized>(
        &mut self,
        vehicle: &VehicleState,
        region: &R,
    ) -> Directives {
        match self.check_jump_start(vehicle, region) {
            Ok(()) => self.begin(Session::JumpApproaching),
            Err(error) => refuse(error),
        }
    }

    /// Like [`Autonav::start_jump`], closing `window` once autonav is engaged.
    pub fn start_jump_window<R: Region + ?Sized>(
        &mut self,
        vehicle: &VehicleState,
        region: &R,
        window: WindowId,
    ) -> Directives {
        match self.check_jump_start(vehicle, region) {
            Ok(()) => {
                let mut directives = self.begin(Session::JumpApproaching);
                directives.push(Command::CloseWindow(window));
                directives
            }
            Err(error) => refuse(error),
        }
    }

    /// Starts flying towards a fixed point in the current region.
    pub fn start_position(&mut self, vehicle: &VehicleState, x: f64, y: f64) -> Directives {
        let check = if vehicle.flags.manual_control {
            Err(AutonavError::ManualControl)
        } else {
            check_maneuverable(vehicle)
        };
        match check {
            Ok(()) => self.begin(Session::PositionApproaching {
                target: vector![x, y],
            }),
            Err(error) => refuse(error),
        }
    }

    /// Stops autonav, unless the vehicle is already in hyperspace.
    pub fn abort(&mut self, vehicle: &VehicleState, reason: Option<&str>) -> Directives {
        self.abort_with(vehicle, AutonavError::Aborted(reason.map(str::to_string)))
    }

    /// Drops the session without side effects. Called by the simulation when
    /// the vehicle leaves autonav's authority, e.g. on completing a jump.
    pub fn end(&mut self) {
        if self.session.is_active() {
            log::debug!("autonav ended in {}", self.session.name());
            self.session = Session::Inactive;
        }
    }

    /// Advances autonav by one tick.
    pub fn think<R: Region + ?Sized>(&mut self, vehicle: &VehicleState, region: &R) -> Directives {
        if !self.session.is_active() || vehicle.flags.hyperspace {
            return Directives::new();
        }

        let jump = match self.check_interrupts(vehicle, region) {
            Ok(jump) => jump,
            Err(error) => return self.abort_with(vehicle, error),
        };

        // The jump sequence owns the controls until it completes or is aborted.
        if vehicle.flags.hyperspace_preparing {
            return Directives::new();
        }

        match (self.session, jump) {
            (Session::JumpApproaching, Some(jump)) => {
                let result = actuator::approach(vehicle, jump.position, &self.config);
                if result.completed {
                    self.transition(Session::JumpBraking);
                }
                result.directives
            }
            (Session::JumpBraking, Some(jump)) => {
                let result = actuator::brake(vehicle, &self.config);
                let mut directives = result.directives;
                if region.can_hyperspace(vehicle, &jump, &self.config) {
                    self.transition(Session::JumpApproaching);
                    directives.push(Command::SetAcceleration(0.0));
                    directives.push(Command::Jump);
                } else if result.completed {
                    // Stopped outside the jump window; approach again.
                    self.transition(Session::JumpApproaching);
                }
                directives
            }
            (Session::PositionApproaching { target }, _) => {
                let result = actuator::approach(vehicle, target, &self.config);
                let mut directives = result.directives;
                if result.completed {
                    self.transition(Session::Inactive);
                    directives.notify(Notice::info("Autonav arrived at position."));
                    directives.outcome = Some(Outcome::Arrived);
                    if vehicle.time_compressed {
                        directives.push(Command::EndTimeCompression);
                    }
                }
                directives
            }
            _ => Directives::new(),
        }
    }

    fn begin(&mut self, session: Session) -> Directives {
        log::debug!("autonav started: {}", session.name());
        self.session = session;
        let mut directives = Directives::new();
        directives.notify(Notice::info("Autonav initialized."));
        if self.config.time_compression > 1.0 {
            directives.push(Command::SetTimeCompression(self.config.time_compression));
        }
        directives
    }

    fn transition(&mut self, session: Session) {
        log::debug!("autonav {} -> {}", self.session.name(), session.name());
        self.session = session;
    }

    fn abort_with(&mut self, vehicle: &VehicleState, error: AutonavError) -> Directives {
        let mut directives = Directives::new();
        if vehicle.flags.hyperspace || !self.session.is_active() {
            return directives;
        }

        log::warn!("autonav aborted in {}: {}", self.session.name(), error);
        self.session = Session::Inactive;
        directives.notify(match &error {
            AutonavError::Aborted(None) => Notice::error("Autonav aborted!"),
            error => Notice::error(format!("Autonav aborted: {}!", error)),
        });
        directives.outcome = Some(Outcome::Aborted {
            reason: error.to_string(),
        });
        directives.push(Command::SetAcceleration(0.0));
        if vehicle.time_compressed {
            directives.push(Command::EndTimeCompression);
        }
        if vehicle.flags.hyperspace_preparing {
            directives.push(Command::AbortHyperspacePreparation);
            directives.notify(Notice::info("Aborting hyperspace sequence."));
        }
        directives
    }

    fn check_jump_start<R: Region + ?Sized>(
        &self,
        vehicle: &VehicleState,
        region: &R,
    ) -> Result<(), AutonavError> {
        if vehicle.flags.manual_control {
            return Err(AutonavError::ManualControl);
        }
        vehicle
            .nav_target
            .and_then(|id| region.jump_point(id))
            .ok_or(AutonavError::NoTarget)?;
        check_maneuverable(vehicle)?;
        self.check_fuel(vehicle)
    }

    /// Conditions re-evaluated every tick. Returns the current jump point
    /// while heading for a jump.
    fn check_interrupts<R: Region + ?Sized>(
        &self,
        vehicle: &VehicleState,
        region: &R,
    ) -> Result<Option<JumpPoint>, AutonavError> {
        let jumping = self.session.is_jump();
        if vehicle.lockons > 0 && (jumping || self.config.lockon_abort_all_states) {
            return Err(AutonavError::LockOnDetected);
        }
        check_maneuverable(vehicle)?;
        if !jumping {
            return Ok(None);
        }
        let jump = vehicle
            .nav_target
            .and_then(|id| region.jump_point(id))
            .ok_or(AutonavError::TargetChanged)?;
        self.check_fuel(vehicle)?;
        Ok(Some(jump))
    }

    fn check_fuel(&self, vehicle: &VehicleState) -> Result<(), AutonavError> {
        if vehicle.fuel < self.config.jump_fuel_cost {
            return Err(AutonavError::NoFuel {
                required: self.config.jump_fuel_cost,
                available: vehicle.fuel,
            });
        }
        Ok(())
    }
}

fn check_maneuverable(vehicle: &VehicleState) -> Result<(), AutonavError> {
    if !vehicle.kinematics.is_maneuverable() {
        return Err(AutonavError::Immobile);
    }
    Ok(())
}

fn refuse(error: AutonavError) -> Directives {
    log::debug!("autonav not started: {:?}", error);
    let mut directives = Directives::new();
    if let Some(notice) = error.notice() {
        directives.notify(notice);
    }
    directives
}
