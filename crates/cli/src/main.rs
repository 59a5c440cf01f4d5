//! Trace-driven cache simulator CLI.
//!
//! This binary wires the core library into a single run:
//! 1. **Configuration:** Positional size/associativity, optional JSON config, flag overrides.
//! 2. **Replay:** Opens the trace and evaluates every access, printing verbose lines on request.
//! 3. **Report:** Prints the end-of-run summary as text or JSON.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cachesim_core::common::SimError;
use cachesim_core::config::{SimConfig, VerboseRange};
use cachesim_core::sim::{Simulator, VerboseReporter, loader};

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Trace-driven write-back cache simulator",
    long_about = "Replay a memory trace against a direct-mapped or set-associative write-back cache \
                  and report hits, misses, traffic, and cycles.\n\n\
                  Trace lines look like `004005b4:R 7fffed50 4`.\n\n\
                  Examples:\n  \
                  cachesim trace.txt 4 1\n  \
                  cachesim trace.txt 16 4 -v 0 100\n  \
                  cachesim trace.txt --config cache.json --json"
)]
struct Cli {
    /// Trace file to replay.
    trace: PathBuf,

    /// Cache size in KB.
    #[arg(required_unless_present = "config")]
    cache_kb: Option<u64>,

    /// Ways per set (1 = direct-mapped).
    #[arg(required_unless_present = "config")]
    associativity: Option<u64>,

    /// Print per-access detail for accesses IC1 through IC2 (inclusive).
    #[arg(short = 'v', num_args = 2, value_names = ["IC1", "IC2"])]
    verbose: Option<Vec<u64>>,

    /// Block size in bytes (power of two).
    #[arg(short, long)]
    block_size: Option<u64>,

    /// JSON config file; explicit arguments override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the summary as JSON.
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset (e.g. `debug`, `cachesim_core=trace`).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber so stdout carries only the report.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Merges the optional config file with command-line overrides.
fn build_config(cli: &Cli) -> Result<SimConfig, SimError> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::from_json_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(size_kb) = cli.cache_kb {
        config.cache.size_kb = size_kb;
    }
    if let Some(ways) = cli.associativity {
        config.cache.associativity = ways;
    }
    if let Some(block_size) = cli.block_size {
        config.cache.block_size = block_size;
    }
    if let Some(bounds) = &cli.verbose {
        if let [lo, hi] = bounds.as_slice() {
            config.verbose = Some(VerboseRange::new(*lo, *hi)?);
        }
    }
    Ok(config)
}

/// Runs one simulation and prints its report.
fn run(cli: &Cli) -> Result<(), SimError> {
    let config = build_config(cli)?;
    tracing::debug!(?config, trace = %cli.trace.display(), "resolved configuration");
    let mut sim = Simulator::new(&config)?;
    let reader = loader::open_trace(&cli.trace)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match config.verbose {
        Some(range) => {
            let mut reporter = VerboseReporter::new(range, &mut out);
            sim.run(reader, |record| reporter.report(record).map(|_| ()))?
        }
        None => sim.run(reader, |_| Ok(()))?,
    };

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &summary)
            .map_err(|e| SimError::Output(io::Error::from(e)))?;
        writeln!(out).map_err(SimError::Output)?;
    } else {
        writeln!(out, "{summary}").map_err(SimError::Output)?;
    }
    out.flush().map_err(SimError::Output)
}
