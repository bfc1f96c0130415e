//! linefit CLI — robust line fitting over delimited 2D observations.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use linefit::settings::{DEFAULT_RESIDUAL_THRESHOLD, DEFAULT_SAMPLE_RETRIES, DEFAULT_WORKERS};
use linefit::{dataset, fit_line, FitSettings, ProgressRecord, ProgressSink, Result};

#[derive(Parser)]
#[command(name = "linefit")]
#[command(about = "Fit a line to noisy 2D observations with parallel RANSAC")]
#[command(version)]
struct Cli {
    /// Path to the comma-delimited observations (columns: x, y).
    data: PathBuf,

    /// Total number of RANSAC trials.
    iterations: usize,

    /// Number of worker threads.
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Inlier threshold on the squared vertical residual.
    #[arg(long, default_value_t = DEFAULT_RESIDUAL_THRESHOLD)]
    threshold: f64,
}

/// Prints one line per local-best improvement, mirroring the run's
/// progressive refinement on stdout.
struct StdoutSink;

impl ProgressSink for StdoutSink {
    fn improved(&self, record: &ProgressRecord) {
        println!(
            "Iteration {} - inliers: {}, m = {:.6}, c = {:.6}",
            record.trial, record.inliers, record.model.slope, record.model.intercept
        );
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let observations = dataset::read_observations(&cli.data)?;
    info!(
        "loaded {} observations from {}",
        observations.len(),
        cli.data.display()
    );

    let settings = FitSettings {
        iterations: cli.iterations,
        workers: cli.workers,
        residual_threshold: cli.threshold,
        sample_retries: DEFAULT_SAMPLE_RETRIES,
    };

    let report = fit_line(&observations, &settings, &StdoutSink)?;

    println!("Outlier ratio: {:.2}%", report.summary.outlier_ratio * 100.0);
    println!("Inlier ratio: {:.2}%", report.summary.inlier_ratio * 100.0);
    println!("Number of inliers: {}", report.inlier_count);
    println!(
        "Best parameters: m = {:.6}, c = {:.6}",
        report.model.slope, report.model.intercept
    );

    Ok(())
}
