use crate::region::Region;
use crate::scenario::{self, Scenario, Status};
use crate::ship::{self, Ship};
use crate::snapshot::Snapshot;
use helm_autonav::{
    Autonav, AutonavConfig, Command, Directives, JumpPointId, Notice, Outcome, Session,
    VehicleFlags, VehicleState, WindowId,
};
use nalgebra::vector;
use std::collections::BTreeMap;

pub const PHYSICS_TICK_LENGTH: f64 = 1.0 / 60.0;
/// Time between a jump request and entering hyperspace. Abortable.
pub const HYPERSPACE_PREP_TIME: f64 = 2.0;
/// Time spent in hyperspace. Not abortable.
pub const HYPERSPACE_FLY_TIME: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Hyperspace {
    Idle,
    Preparing { lane: JumpPointId, remaining: f64 },
    Flying { destination: String, remaining: f64 },
}

pub struct Simulation {
    scenario: Option<Box<dyn Scenario>>,
    pub ship: Ship,
    region: Region,
    galaxy: BTreeMap<String, Region>,
    nav_target: Option<JumpPointId>,
    autonav: Autonav,
    hyperspace: Hyperspace,
    time_compression: f64,
    open_windows: Vec<WindowId>,
    pub(crate) events: SimEvents,
    status: Status,
    tick: u32,
    time: f64,
    seed: u32,
}

impl Simulation {
    pub fn new(scenario_name: &str, seed: u32) -> Box<Simulation> {
        Self::with_config(scenario_name, seed, AutonavConfig::default())
    }

    pub fn with_config(
        scenario_name: &str,
        seed: u32,
        config: AutonavConfig,
    ) -> Box<Simulation> {
        log::info!("seed {seed}");
        let mut sim = Box::new(Simulation {
            scenario: None,
            ship: Ship::new(vector![0.0, 0.0], vector![0.0, 0.0], 0.0, ship::shuttle()),
            region: Region::new("void"),
            galaxy: BTreeMap::new(),
            nav_target: None,
            autonav: Autonav::new(config),
            hyperspace: Hyperspace::Idle,
            time_compression: 1.0,
            open_windows: Vec::new(),
            events: SimEvents::new(),
            status: Status::Running,
            tick: 0,
            time: 0.0,
            seed,
        });

        let mut scenario = scenario::load(scenario_name);
        scenario.init(&mut sim, seed);
        sim.scenario = Some(scenario);

        sim
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Simulated time, including time compression.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn session(&self) -> Session {
        self.autonav.session()
    }

    pub fn autonav(&self) -> &Autonav {
        &self.autonav
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn nav_target(&self) -> Option<JumpPointId> {
        self.nav_target
    }

    pub fn hyperspace(&self) -> &Hyperspace {
        &self.hyperspace
    }

    pub fn time_compression(&self) -> f64 {
        self.time_compression
    }

    pub fn open_windows(&self) -> &[WindowId] {
        &self.open_windows
    }

    pub fn events(&self) -> &SimEvents {
        &self.events
    }

    pub fn spawn(&mut self, ship: Ship) {
        self.ship = ship;
    }

    /// Registers a region that jumps can lead to.
    pub fn add_region(&mut self, region: Region) {
        self.galaxy.insert(region.name.clone(), region);
    }

    /// Moves the ship into a registered region without a jump.
    pub fn enter_region(&mut self, name: &str) {
        self.region = self
            .galaxy
            .get(name)
            .cloned()
            .unwrap_or_else(|| Region::new(name));
        self.nav_target = None;
    }

    /// Replaces the current region's definition in place. Jump targets
    /// selected earlier keep their index, which may no longer be valid.
    pub fn reload_region(&mut self, region: Region) {
        log::debug!("reloading region {}", region.name);
        self.galaxy.insert(region.name.clone(), region.clone());
        self.region = region;
    }

    pub fn select_jump(&mut self, target: Option<JumpPointId>) {
        self.nav_target = target;
    }

    pub fn open_window(&mut self, window: WindowId) {
        self.open_windows.push(window);
    }

    pub fn start_autonav_jump(&mut self) {
        let vehicle = self.vehicle_state();
        let directives = self.autonav.start_jump(&vehicle, &self.region);
        self.apply(directives);
    }

    pub fn start_autonav_jump_window(&mut self, window: WindowId) {
        let vehicle = self.vehicle_state();
        let directives = self.autonav.start_jump_window(&vehicle, &self.region, window);
        self.apply(directives);
    }

    pub fn start_autonav_position(&mut self, x: f64, y: f64) {
        let vehicle = self.vehicle_state();
        let directives = self.autonav.start_position(&vehicle, x, y);
        self.apply(directives);
    }

    pub fn abort_autonav(&mut self, reason: Option<&str>) {
        let vehicle = self.vehicle_state();
        let directives = self.autonav.abort(&vehicle, reason);
        self.apply(directives);
    }

    pub fn vehicle_state(&self) -> VehicleState {
        VehicleState {
            position: self.ship.position,
            velocity: self.ship.velocity,
            heading: self.ship.heading,
            kinematics: self.ship.kinematics(),
            acceleration: self.ship.acceleration,
            fuel: self.ship.fuel,
            flags: VehicleFlags {
                manual_control: self.ship.manual_control,
                hyperspace: matches!(self.hyperspace, Hyperspace::Flying { .. }),
                hyperspace_preparing: matches!(self.hyperspace, Hyperspace::Preparing { .. }),
            },
            lockons: self.ship.lockons,
            nav_target: self.nav_target,
            time_compressed: self.time_compression != 1.0,
        }
    }

    pub fn step(&mut self) {
        self.events.clear();
        let dt = PHYSICS_TICK_LENGTH * self.time_compression;

        if self.autonav.is_active() {
            let vehicle = self.vehicle_state();
            let directives = self.autonav.think(&vehicle, &self.region);
            self.apply(directives);
        }

        self.ship.tick(dt);
        self.tick_hyperspace(dt);

        let mut scenario = std::mem::take(&mut self.scenario);
        if let Some(scenario) = scenario.as_mut() {
            scenario.tick(self);
        }
        self.scenario = scenario;

        self.tick += 1;
        self.time += dt;
    }

    fn apply(&mut self, directives: Directives) {
        if let Some(outcome) = &directives.outcome {
            self.status = match outcome {
                Outcome::Arrived => Status::Arrived,
                Outcome::Aborted { .. } => Status::Aborted,
            };
            self.events.outcome = Some(outcome.clone());
        } else if self.autonav.is_active() && self.status != Status::Running {
            // A new session started.
            self.status = Status::Running;
        }

        for command in directives {
            match command {
                Command::SetAcceleration(level) => self.ship.accelerate(level),
                Command::Face(bearing) => self.ship.face(bearing),
                Command::Jump => self.begin_hyperspace(),
                Command::AbortHyperspacePreparation => self.abort_hyperspace(),
                Command::SetTimeCompression(factor) => {
                    log::debug!("time compression {factor}");
                    self.time_compression = factor;
                }
                Command::EndTimeCompression => {
                    log::debug!("time compression off");
                    self.time_compression = 1.0;
                }
                Command::CloseWindow(window) => {
                    self.open_windows.retain(|&w| w != window);
                    self.events.closed_windows.push(window);
                }
                Command::Notify(notice) => {
                    log::info!("{}", notice);
                    self.events.notices.push(notice);
                }
            }
        }
    }

    fn begin_hyperspace(&mut self) {
        if self.hyperspace != Hyperspace::Idle {
            log::warn!("jump requested during {:?}", self.hyperspace);
            return;
        }
        let Some(lane) = self.nav_target.filter(|&id| self.region.lane(id).is_some()) else {
            log::warn!("jump requested without a valid target");
            return;
        };
        log::info!("preparing jump through lane {}", lane.0);
        self.ship.accelerate(0.0);
        self.hyperspace = Hyperspace::Preparing {
            lane,
            remaining: HYPERSPACE_PREP_TIME,
        };
        self.events.jumps.push(lane);
    }

    fn abort_hyperspace(&mut self) {
        if let Hyperspace::Preparing { .. } = self.hyperspace {
            log::info!("hyperspace preparation cancelled");
            self.hyperspace = Hyperspace::Idle;
        }
    }

    fn tick_hyperspace(&mut self, dt: f64) {
        match &mut self.hyperspace {
            Hyperspace::Idle => {}
            Hyperspace::Preparing { lane, remaining } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    match self.region.lane(*lane) {
                        Some(lane) => {
                            log::info!("entering hyperspace towards {}", lane.destination);
                            self.hyperspace = Hyperspace::Flying {
                                destination: lane.destination.clone(),
                                remaining: HYPERSPACE_FLY_TIME,
                            };
                        }
                        None => {
                            log::warn!("jump lane vanished during preparation");
                            self.hyperspace = Hyperspace::Idle;
                        }
                    }
                }
            }
            Hyperspace::Flying {
                destination,
                remaining,
            } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    let destination = destination.clone();
                    self.arrive(&destination);
                }
            }
        }
    }

    fn arrive(&mut self, destination: &str) {
        let origin = self.region.name.clone();
        self.enter_region(destination);
        log::info!("arrived in {} from {}", destination, origin);
        self.ship.fuel -= self.autonav.config().jump_fuel_cost;
        self.ship.position = self.region.arrival_point(&origin);
        self.ship.stop();
        self.hyperspace = Hyperspace::Idle;
        self.autonav.end();
        self.status = Status::Jumped;
        self.events.arrived = Some(destination.to_string());
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            time: self.time,
            status: self.status,
            region: self.region.name.clone(),
            session: self.autonav.session(),
            class: self.ship.data.class,
            position: self.ship.position.into(),
            velocity: self.ship.velocity,
            heading: self.ship.heading,
            acceleration: self.ship.acceleration,
            fuel: self.ship.fuel,
            time_compression: self.time_compression,
            notices: self.events.notices.clone(),
        }
    }
}

pub struct SimEvents {
    pub notices: Vec<Notice>,
    /// Lanes a jump was started through.
    pub jumps: Vec<JumpPointId>,
    pub closed_windows: Vec<WindowId>,
    pub outcome: Option<Outcome>,
    /// Region entered at the end of a jump.
    pub arrived: Option<String>,
}

impl SimEvents {
    pub fn new() -> Self {
        Self {
            notices: vec![],
            jumps: vec![],
            closed_windows: vec![],
            outcome: None,
            arrived: None,
        }
    }

    pub fn clear(&mut self) {
        self.notices.clear();
        self.jumps.clear();
        self.closed_windows.clear();
        self.outcome = None;
        self.arrived = None;
    }
}

impl Default for SimEvents {
    fn default() -> Self {
        SimEvents::new()
    }
}
