//! Command-line front end.
//!
//! Reads a job batch, runs the tick simulation, optionally persists the
//! execution log, and prints the report. `--replay` renders a persisted
//! log without simulating.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::SimulationConfig;
use crate::error::CliError;
use crate::ingest::JobReader;
use crate::models::ExecutionLog;
use crate::report::{read_log, render_report, write_log};
use crate::scheduler::{RunKpi, SimulationRequest, TickScheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Time/Job table followed by the per-submitter summary.
    Text,
    /// Execution log and KPIs as JSON.
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "tick-schedule",
    about = "Simulate priority scheduling of a job batch on a pool of processing units",
    version
)]
pub struct Cli {
    /// Number of processing units.
    #[arg(required_unless_present = "replay")]
    pub units: Option<usize>,

    /// Job file (defaults to stdin).
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Write the execution log token stream to this file.
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Render a previously written execution log instead of simulating.
    #[arg(long, conflicts_with_all = ["input", "log"])]
    pub replay: Option<PathBuf>,

    /// Job input has no header line.
    #[arg(long)]
    pub no_header: bool,

    /// Output format for the report on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Installs a stderr `tracing` subscriber. `RUST_LOG` overrides `verbose`.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub fn run_from_env() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let stdout = io::stdout();
    run(&cli, stdout.lock())
}

pub fn run<W: Write>(cli: &Cli, mut out: W) -> Result<(), CliError> {
    if let Some(path) = &cli.replay {
        let log = read_log(BufReader::new(File::open(path)?))?;
        return emit_log(cli.format, &log, &mut out);
    }

    let config = SimulationConfig::new(cli.units.unwrap_or_default()).with_header(!cli.no_header);
    let reader = JobReader::new().with_header(config.skip_header);
    let outcome = match &cli.input {
        Some(path) => reader.read(BufReader::new(File::open(path)?))?,
        None => reader.read(io::stdin().lock())?,
    };

    let request = SimulationRequest::new(outcome.jobs).with_config(config);
    let run = TickScheduler::new().schedule_request(&request)?;

    if let Some(path) = &cli.log {
        let file = BufWriter::new(File::create(path)?);
        write_log(&run.log, file)?;
        info!(path = %path.display(), "execution log written");
    }

    match cli.format {
        OutputFormat::Text => emit_log(OutputFormat::Text, &run.log, &mut out),
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "log": run.log,
                "kpi": RunKpi::calculate(&run),
                "stopped_at_line": outcome.stopped.map(|s| s.line),
            });
            serde_json::to_writer_pretty(&mut out, &payload)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn emit_log<W: Write>(format: OutputFormat, log: &ExecutionLog, out: &mut W) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => out.write_all(render_report(log).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, log)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
