//! Target process engine.
//!
//! Spawns the benchmark target, drains its numeric stdout stream, and
//! classifies its termination status. The stream is read to end-of-file
//! before the exit status is reaped, so the child never blocks on a full
//! pipe and every sample is accounted for.

use crate::model::{CaptureResult, ExitOutcome, RunConfig};
use anyhow::{Context, Result};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

pub struct TargetEngine {
    cfg: RunConfig,
}

impl TargetEngine {
    pub fn new(cfg: RunConfig) -> Self {
        Self { cfg }
    }

    /// Run the target to completion and capture its sample stream.
    ///
    /// The target is spawned with no arguments; its stderr and stdin are
    /// inherited. Each stdout line must parse as a floating-point number,
    /// anything else aborts the run. There is no timeout: a target that
    /// never closes its stream keeps this call pending.
    pub async fn run(self) -> Result<CaptureResult> {
        let mut child = Command::new(&self.cfg.target)
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to spawn benchmark target `{}`", self.cfg.target))?;

        let stdout = child
            .stdout
            .take()
            .context("stdout pipe of the benchmark target was not captured")?;

        let mut samples = Vec::new();
        let mut lines = BufReader::new(stdout).lines();
        while let Some(line) = lines
            .next_line()
            .await
            .with_context(|| format!("failed to read output of `{}`", self.cfg.target))?
        {
            let value: f64 = line.trim().parse().with_context(|| {
                format!("unparseable sample line `{line}` from `{}`", self.cfg.target)
            })?;
            samples.push(value);
        }

        let status = child
            .wait()
            .await
            .with_context(|| format!("failed to wait for benchmark target `{}`", self.cfg.target))?;

        Ok(CaptureResult {
            samples,
            outcome: ExitOutcome::from_status(status),
        })
    }
}
