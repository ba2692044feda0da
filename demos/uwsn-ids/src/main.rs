//! uwsn-ids: labelled dataset generator for position-spoofing detection in
//! underwater sensor networks.
//!
//! A moored sink collects periodic position reports from `--num-nodes`
//! sensors drifting on random-waypoint paths.  With `--run-type 1` (JUMP) or
//! `2` (DRIFT) the first `--attackers` sensors start lying about their
//! position at `--attack-start`.  Every frame that reaches the sink becomes
//! one CSV row carrying both the claimed and the true position.
//!
//! ```text
//! uwsn-ids --run-type 2 --seed 7 --csv-file drift_7.csv
//! RUST_LOG=debug uwsn-ids --num-nodes 5 --sim-time 300
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use uw_attack::AttackKind;
use uw_channel::ChannelConfig;
use uw_core::SimTime;
use uw_mobility::WaypointConfig;
use uw_output::{CsvWriter, DatasetObserver, Fanout};
use uw_sim::{ScenarioConfig, SimBuilder, reference_world};


// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "uwsn-ids", about = "UWSN position-spoofing dataset generator")]
struct Args {
    /// Attack type: 0 none, 1 jump, 2 drift
    #[arg(long, default_value_t = 0)]
    run_type: u8,
    /// Master RNG seed
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// RNG run (substream) number; defaults to the run type
    #[arg(long)]
    run: Option<u64>,
    /// Output CSV path (created or truncated)
    #[arg(long, default_value = "uwsn_data_default.csv")]
    csv_file: PathBuf,
    /// Nominal duration in seconds; sensors stop sending here
    #[arg(long, default_value_t = 2000.0)]
    sim_time: f64,
    /// Number of sensors (the sink is extra)
    #[arg(long, default_value_t = 30)]
    num_nodes: u32,
    /// Send period in seconds
    #[arg(long, default_value_t = 30.0)]
    interval: f64,
    /// Number of attacking sensors (ids 1..=attackers)
    #[arg(long, default_value_t = 5)]
    attackers: u32,
    /// Attack activation time in seconds
    #[arg(long, default_value_t = 500.0)]
    attack_start: f64,
    /// Extra independent per-frame loss probability
    #[arg(long, default_value_t = 0.0)]
    loss: f64,
    /// Also write the dataset to this SQLite database
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite: Option<PathBuf>,
}

impl Args {
    fn scenario(&self) -> Result<ScenarioConfig> {
        let attack_kind = AttackKind::try_from(self.run_type)
            .with_context(|| format!("invalid --run-type {}", self.run_type))?;
        let interval = SimTime::try_from_secs_f64(self.interval)
            .context("invalid --interval")?
            .since(SimTime::ZERO);
        Ok(ScenarioConfig {
            sensor_count: self.num_nodes,
            seed: self.seed,
            run: self.run.unwrap_or(u64::from(self.run_type)),
            app_stop: SimTime::try_from_secs_f64(self.sim_time).context("invalid --sim-time")?,
            interval,
            attack_kind,
            attacker_count: self.attackers.min(self.num_nodes),
            attack_start: SimTime::try_from_secs_f64(self.attack_start)
                .context("invalid --attack-start")?,
            ..ScenarioConfig::default()
        })
    }

    fn writers(&self) -> Result<Fanout> {
        let mut fan = Fanout::new();
        let csv = CsvWriter::create(&self.csv_file)
            .with_context(|| format!("cannot open {}", self.csv_file.display()))?;
        fan.push(csv);
        #[cfg(feature = "sqlite")]
        {
            if let Some(path) = &self.sqlite {
                let db = uw_output::SqliteWriter::create(path)
                    .with_context(|| format!("cannot open {}", path.display()))?;
                fan.push(db);
            }
        }
        Ok(fan)
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let scenario = args.scenario()?;
    let writers = args.writers()?;
    let channel = ChannelConfig { loss_probability: args.loss, ..ChannelConfig::default() };

    info!(
        run_type = %scenario.attack_kind,
        seed = scenario.seed,
        run = scenario.run,
        output = %args.csv_file.display(),
        "starting scenario"
    );

    let (medium, oracle) = reference_world(&scenario, channel, WaypointConfig::default())
        .context("building channel and mobility")?;
    let mut sim = SimBuilder::new(scenario, medium, oracle)
        .build()
        .context("building simulation")?;

    let mut observer = DatasetObserver::new(writers);
    let stats = sim.run(&mut observer).context("simulation aborted")?;

    println!(
        "sent {}  delivered {}  out-of-range {}  lost {}  collided {}  rows {} ({} anomalous)",
        stats.sent,
        stats.delivered,
        stats.out_of_range,
        stats.lost,
        stats.collided,
        observer.rows(),
        observer.anomalous(),
    );
    info!(output = %args.csv_file.display(), "dataset saved");
    Ok(())
}
