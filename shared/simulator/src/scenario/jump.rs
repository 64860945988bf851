use super::prelude::*;

/// Fly to the Alpha-Beta lane with exactly enough fuel for one jump.
pub struct JumpScenario {}

impl Scenario for JumpScenario {
    fn name(&self) -> String {
        "jump".into()
    }

    fn human_name(&self) -> String {
        "Jump approach".into()
    }

    fn init(&mut self, sim: &mut Simulation, _seed: u32) {
        add_frontier(sim);
        let mut ship = Ship::new(vector![0.0, 0.0], vector![0.0, 0.0], 0.0, shuttle());
        ship.fuel = sim.autonav().config().jump_fuel_cost;
        sim.spawn(ship);
        sim.select_jump(Some(FRONTIER_LANE));
        sim.start_autonav_jump();
    }
}

/// The region's lane list is replaced while approaching.
pub struct RegionReloadScenario {}

impl RegionReloadScenario {
    pub const RELOAD_TICK: u32 = 60;
}

impl Scenario for RegionReloadScenario {
    fn name(&self) -> String {
        "region_reload".into()
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
        if sim.tick() == Self::RELOAD_TICK {
            sim.reload_region(Region::new("Alpha"));
        }
    }
}
