use crate::engine::TargetEngine;
use crate::model::RunConfig;
use crate::text_summary;
use anyhow::Result;
use clap::Parser;

/// One-sided outlier distance relative to the mean of the raw samples.
const OUTLIER_DIST: f64 = 3.0;
const LOW_PERCENTILE: f64 = 5.0;
const HIGH_PERCENTILE: f64 = 95.0;

/// The whole CLI surface is one positional argument naming the target.
/// Help/version flags are disabled and hyphen-leading values accepted so
/// that any single argument is taken as the target and anything else is
/// an argument-count error.
#[derive(Debug, Parser, Clone)]
#[command(name = "bench-eval", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Path or command name of the executable to benchmark.
    #[arg(allow_hyphen_values = true)]
    pub target: String,
}

/// Build a `RunConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> RunConfig {
    RunConfig {
        target: args.target.clone(),
        outlier_dist: OUTLIER_DIST,
        low_percentile: LOW_PERCENTILE,
        high_percentile: HIGH_PERCENTILE,
    }
}

/// Run the target to completion and print the single report line.
pub async fn run(args: Cli) -> Result<()> {
    let cfg = build_config(&args);
    let capture = TargetEngine::new(cfg.clone()).run().await?;
    let report = text_summary::render_report(&cfg, &capture)?;
    println!("{report}");
    Ok(())
}
