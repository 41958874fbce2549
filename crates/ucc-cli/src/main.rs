//! UCCMon CLI

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use ucc_hist::{BookedHistogram, MemoryStore};
use ucc_monitor::{EventRecord, MonitorConfig, RunSummary, UccMonitor};

#[derive(Parser)]
#[command(name = "uccmon")]
#[command(about = "UCCMon - trigger-gated histogram collection for heavy-ion UCC monitoring")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Book histograms and run the collector over an event stream
    Run {
        /// Monitor configuration (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Event stream, one JSON record per line
        #[arg(short, long)]
        events: PathBuf,

        /// Output file for the report (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load and validate a configuration, printing the output folder
    Validate {
        /// Monitor configuration (JSON)
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Print version information
    Version,
}

/// JSON report written by `run`.
#[derive(Serialize)]
struct RunReport {
    summary: RunSummary,
    histograms: Vec<BookedHistogram>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run { config, events, output } => cmd_run(&config, &events, output.as_deref()),
        Commands::Validate { config } => cmd_validate(&config),
        Commands::Version => {
            println!("uccmon {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn cmd_run(config: &Path, events: &Path, output: Option<&Path>) -> Result<()> {
    let cfg = MonitorConfig::from_path(config)
        .with_context(|| format!("loading config {}", config.display()))?;
    tracing::info!(trigger_path = %cfg.trigger_path, "configuration loaded");

    let mut store = MemoryStore::new();
    let booked = UccMonitor::new(cfg)?.book(&mut store)?;

    let file = File::open(events).with_context(|| format!("opening events {}", events.display()))?;
    let reader = BufReader::new(file);

    let mut summary = RunSummary::default();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading events line {}", lineno + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let record: EventRecord = serde_json::from_str(&line)
            .with_context(|| format!("parsing events line {}", lineno + 1))?;
        let outcome = booked.analyze(&record, &mut store)?;
        summary.record(&outcome);
    }

    tracing::info!(
        events = summary.events,
        fired = summary.fired,
        cluster_samples = summary.cluster_samples,
        et_samples = summary.et_samples,
        "run complete"
    );

    let report = RunReport { summary, histograms: store.snapshot().to_vec() };
    let json = serde_json::to_string_pretty(&report)?;
    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("writing report {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_validate(config: &Path) -> Result<()> {
    let cfg = MonitorConfig::from_path(config)
        .with_context(|| format!("loading config {}", config.display()))?;
    let monitor = UccMonitor::new(cfg)?;
    println!("{}", monitor.config().folder());
    Ok(())
}
