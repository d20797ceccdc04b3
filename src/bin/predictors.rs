//! Evaluate the default predictor lineup against a recorded trace.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bpeval::report::write_report;
use bpeval::sim::{default_lineup, evaluate_lineup, Execution};
use bpeval::stats::TraceProfile;
use bpeval::trace::Trace;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File path to the input trace
    input: PathBuf,

    /// File path to the output report
    output: PathBuf,

    /// Evaluate variants one at a time instead of on worker threads
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let trace = Trace::from_path(&args.input)
        .with_context(|| format!("failed to load trace {}", args.input.display()))?;

    // Open the report before any simulation runs, so a bad output path
    // fails up front.
    let out = File::create(&args.output).with_context(|| {
        format!("failed to open report file {}", args.output.display())
    })?;

    let profile = TraceProfile::from_records(trace.records());
    log::info!(
        "loaded {} records: {} unique branches, {:.2}% taken",
        profile.num_records(),
        profile.num_unique_branches(),
        profile.taken_rate() * 100.0
    );
    for (addr, data) in profile.hot_branches(5) {
        log::debug!(
            "hot branch {:#x}: {} executions, {:.2}% taken",
            addr,
            data.occ,
            data.taken_rate() * 100.0
        );
    }

    let execution = if args.sequential {
        Execution::Sequential
    } else {
        Execution::Parallel
    };
    let results = evaluate_lineup(trace.records(), &default_lineup(), execution);

    write_report(BufWriter::new(out), &results).with_context(|| {
        format!("failed to write report {}", args.output.display())
    })?;
    log::info!("wrote report to {}", args.output.display());

    Ok(())
}
