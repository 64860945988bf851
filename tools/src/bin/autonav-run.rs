use anyhow::bail;
use clap::Parser;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use helm_simulator::scenario;
use helm_simulator::simulation::Simulation;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Runs an autonav scenario and reports how it ended")]
struct Arguments {
    scenario: String,

    #[arg(short, long, default_value_t = 0)]
    seed: u32,

    /// Number of consecutive seeds to run, starting at --seed.
    #[arg(short, long, default_value_t = 1)]
    num_seeds: u32,

    #[arg(long, default_value_t = scenario::MAX_TICKS)]
    max_ticks: u32,

    /// JSON file with autonav settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON snapshot every simulated second.
    #[arg(long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Arguments::parse();
    if scenario::load_safe(&args.scenario).is_none() {
        bail!(
            "Unknown scenario {:?}, expected one of {}",
            args.scenario,
            scenario::list().join(", ")
        );
    }
    let config = helm_tools::load_config(args.config.as_deref())?;
    log::debug!("config {:?}", config);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Seed", "Status", "Ticks", "Time", "Region", "Fuel", "Reason",
    ]);

    for seed in args.seed..args.seed + args.num_seeds {
        let mut sim = Simulation::with_config(&args.scenario, seed, config.clone());
        let report = helm_tools::run(&mut sim, args.max_ticks, |snapshot| {
            if args.trace {
                match serde_json::to_string(snapshot) {
                    Ok(json) => println!("{json}"),
                    Err(e) => log::error!("Failed to serialize snapshot: {e}"),
                }
            }
        });
        log::info!(
            "seed {} finished with {:?} after {} ticks",
            seed,
            report.status,
            report.ticks
        );
        table.add_row(vec![
            report.seed.to_string(),
            format!("{:?}", report.status),
            report.ticks.to_string(),
            format!("{:.2}", report.time),
            report.region,
            format!("{:.0}", report.fuel),
            report.reason.unwrap_or_default(),
        ]);
    }

    println!("{table}");
    Ok(())
}
