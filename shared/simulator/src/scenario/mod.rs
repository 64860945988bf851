mod interrupt;
mod jump;
mod position;

use crate::region::Region;
use crate::simulation::Simulation;
use nalgebra::vector;
use serde::{Deserialize, Serialize};

pub mod prelude {
    pub use super::Scenario;
    pub use super::Status;
    pub use super::{add_frontier, FRONTIER_LANE};
    pub use crate::region::Region;
    pub use crate::rng::{new_rng, SeededRng};
    pub use crate::ship::{self, courier, freighter, shuttle, Ship};
    pub use crate::simulation::Simulation;
    pub use helm_autonav::{JumpPointId, Session};
    pub use nalgebra::{vector, Vector2};
    pub use rand::Rng;
    pub use std::f64::consts::{PI, TAU};
}

pub const MAX_TICKS: u32 = 5 * 60 * 60;

/// Lane from Alpha to Beta.
pub const FRONTIER_LANE: helm_autonav::JumpPointId = helm_autonav::JumpPointId(0);

#[derive(PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Copy, Clone)]
pub enum Status {
    Running,
    Arrived,
    Jumped,
    Aborted,
}

pub trait Scenario {
    fn name(&self) -> String;

    fn human_name(&self) -> String {
        self.name()
    }

    fn init(&mut self, sim: &mut Simulation, seed: u32);

    fn tick(&mut self, _: &mut Simulation) {}
}

pub fn load_safe(name: &str) -> Option<Box<dyn Scenario>> {
    let scenario: Option<Box<dyn Scenario>> = match name {
        "position" => Some(Box::new(position::PositionScenario {})),
        "drift" => Some(Box::new(position::DriftScenario {})),
        "jump" => Some(Box::new(jump::JumpScenario {})),
        "region_reload" => Some(Box::new(jump::RegionReloadScenario {})),
        "lockon" => Some(Box::new(interrupt::LockonScenario {})),
        "fuel_leak" => Some(Box::new(interrupt::FuelLeakScenario::new())),
        // Testing
        "test" => Some(Box::new(test::TestScenario {})),
        _ => None,
    };
    if let Some(scenario) = scenario.as_ref() {
        assert_eq!(scenario.name(), name);
    }
    scenario
}

pub fn load(name: &str) -> Box<dyn Scenario> {
    match load_safe(name) {
        Some(scenario) => scenario,
        None => panic!("Unknown scenario"),
    }
}

pub fn list() -> Vec<String> {
    vec![
        "position",
        "drift",
        "jump",
        "region_reload",
        "lockon",
        "fuel_leak",
    ]
    .iter()
    .map(|x| x.to_string())
    .collect()
}

/// Two regions joined by a single lane. The ship starts in Alpha.
pub fn add_frontier(sim: &mut Simulation) {
    sim.add_region(Region::new("Alpha").with_lane(vector![4000.0, 0.0], 150.0, "Beta"));
    sim.add_region(Region::new("Beta").with_lane(vector![-3000.0, 500.0], 150.0, "Alpha"));
    sim.enter_region("Alpha");
}
