//! Report rendering for a completed run.
//!
//! Produces the single stdout line of the tool: an `#exit …` commentary
//! line when the target died abnormally, or the mean/p5/p95 summary of
//! the filtered samples. Outer harnesses treat lines starting with `#`
//! as non-data commentary.

use crate::metrics;
use crate::model::{CaptureResult, ExitOutcome, RunConfig};
use anyhow::{Context, Result};

/// Render the report line for a completed capture.
///
/// Statistics are only computed for a clean exit; otherwise the exit
/// status is reported verbatim and the samples are discarded.
pub fn render_report(cfg: &RunConfig, capture: &CaptureResult) -> Result<String> {
    match capture.outcome {
        ExitOutcome::Signaled(signal) => Ok(format!("#exit signal {signal}")),
        ExitOutcome::Code(code) => Ok(format!("#exit code {code}")),
        ExitOutcome::Clean => render_summary(cfg, &capture.samples),
    }
}

fn render_summary(cfg: &RunConfig, samples: &[f64]) -> Result<String> {
    let kept = metrics::remove_outliers(samples, cfg.outlier_dist);
    let summary = metrics::compute_summary(&kept, cfg.low_percentile, cfg.high_percentile)
        .context("no samples left to summarize after outlier removal")?;
    Ok(format!(
        "{:.6} {:.6} {:.6}",
        summary.mean, summary.low, summary.high
    ))
}
