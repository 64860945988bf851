use super::prelude::*;

/// A missile locks on halfway through the acceleration phase.
pub struct LockonScenario {}

impl LockonScenario {
    pub const LOCKON_TICK: u32 = 120;
}

impl Scenario for LockonScenario {
    fn name(&self) -> String {
        "lockon".into()
    }

    fn init(&mut self, sim: &mut Simulation, _seed: u32) {
        add_frontier(sim);
        sim.spawn(Ship::new(
            vector![0.0, 0.0],
            vector![0.0, 0.0],
            0.0,
            shuttle(),
        ));
        sim.select_jump(Some(FRONTIER_LANE));
        sim.start_autonav_jump();
    }

    fn tick(&mut self, sim: &mut Simulation) {
        if sim.tick() == Self::LOCKON_TICK {
            sim.ship.lockons = 1;
        }
    }
}

/// Fuel drains below the jump cost as soon as braking starts.
#[derive(Default)]
pub struct FuelLeakScenario {
    leaked: bool,
}

impl FuelLeakScenario {
    pub fn new() -> Self {
        Self { leaked: false }
    }
}

impl Scenario for FuelLeakScenario {
    fn name(&self) -> String {
        "fuel_leak".into()
    }

    fn init(&mut self, sim: &mut Simulation, _seed: u32) {
        add_frontier(sim);
        let mut ship = Ship::new(vector![0.0, 0.0], vector![0.0, 0.0], 0.0, shuttle());
        ship.fuel = 150.0;
        sim.spawn(ship);
        sim.select_jump(Some(FRONTIER_LANE));
        sim.start_autonav_jump();
    }

    fn tick(&mut self, sim: &mut Simulation) {
        if !self.leaked && sim.session() == Session::JumpBraking {
            log::info!("fuel leak at tick {}", sim.tick());
            sim.ship.fuel = 50.0;
            self.leaked = true;
        }
    }
}
