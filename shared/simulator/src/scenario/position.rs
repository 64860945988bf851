use super::prelude::*;

pub struct PositionScenario {}

impl Scenario for PositionScenario {
    fn name(&self) -> String {
        "position".into()
    }

    fn human_name(&self) -> String {
        "Point approach".into()
    }

    fn init(&mut self, sim: &mut Simulation, _seed: u32) {
        add_frontier(sim);
        sim.spawn(Ship::new(
            vector![0.0, 0.0],
            vector![0.0, 0.0],
            0.0,
            shuttle(),
        ));
        sim.start_autonav_position(1000.0, 0.0);
    }
}

/// Point approach from a random heading with some initial drift.
pub struct DriftScenario {}

impl Scenario for DriftScenario {
    fn name(&self) -> String {
        "drift".into()
    }

    fn human_name(&self) -> String {
        "Point approach with drift".into()
    }

    fn init(&mut self, sim: &mut Simulation, seed: u32) {
        add_frontier(sim);
        let mut rng = new_rng(seed);
        let data = match rng.gen_range(0..3) {
            0 => shuttle(),
            1 => courier(),
            _ => freighter(),
        };
        let drift = Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
            * (0.25 * data.max_speed);
        sim.spawn(Ship::new(
            vector![0.0, 0.0],
            drift,
            rng.gen_range(0.0..TAU),
            data,
        ));
        let distance = rng.gen_range(2000.0..6000.0);
        let angle: f64 = rng.gen_range(0.0..TAU);
        sim.start_autonav_position(distance * angle.cos(), distance * angle.sin());
    }
}
