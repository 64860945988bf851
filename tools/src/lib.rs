use anyhow::Context;
use helm_autonav::{AutonavConfig, Outcome};
use helm_simulator::scenario::Status;
use helm_simulator::simulation::Simulation;
use helm_simulator::snapshot::Snapshot;
use std::path::Path;

pub fn load_config(path: Option<&Path>) -> anyhow::Result<AutonavConfig> {
    let Some(path) = path else {
        return Ok(AutonavConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    AutonavConfig::from_json(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub seed: u32,
    pub status: Status,
    pub ticks: u32,
    pub time: f64,
    pub region: String,
    pub fuel: f64,
    /// Abort reason, if the run ended in an abort.
    pub reason: Option<String>,
}

/// Steps `sim` until it finishes or `max_ticks` is reached, passing a snapshot
/// to `trace` once per simulated second.
pub fn run(
    sim: &mut Simulation,
    max_ticks: u32,
    mut trace: impl FnMut(&Snapshot),
) -> RunReport {
    let mut reason = None;
    let mut next_trace = 0.0;
    while sim.status() == Status::Running && sim.tick() < max_ticks {
        sim.step();
        if let Some(Outcome::Aborted { reason: r }) = &sim.events().outcome {
            reason = Some(r.clone());
        }
        if sim.time() >= next_trace {
            trace(&sim.snapshot());
            next_trace = sim.time().floor() + 1.0;
        }
    }
    RunReport {
        seed: sim.seed(),
        status: sim.status(),
        ticks: sim.tick(),
        time: sim.time(),
        region: sim.region().name.clone(),
        fuel: sim.ship.fuel,
        reason,
    }
}
