use std::process::ExitStatus;

/// Parameters for a single benchmark run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path or command name of the executable to benchmark.
    pub target: String,
    /// Samples at or above `outlier_dist` times the raw mean are discarded.
    pub outlier_dist: f64,
    pub low_percentile: f64,
    pub high_percentile: f64,
}

/// Termination status of the target process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Exited cleanly with status code 0.
    Clean,
    /// Terminated by a signal (positive signal number).
    Signaled(i32),
    /// Exited with a non-zero status code.
    Code(i32),
}

impl ExitOutcome {
    /// Classify a reaped exit status. Signal termination takes priority
    /// over the exit code; signals are only observable on Unix.
    pub fn from_status(status: ExitStatus) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ExitOutcome::Signaled(signal);
            }
        }
        match status.code() {
            Some(code) if code != 0 => ExitOutcome::Code(code),
            _ => ExitOutcome::Clean,
        }
    }
}

/// Everything captured from one target run: the raw sample sequence in
/// emission order, and how the target terminated.
#[derive(Debug, Clone)]
pub struct CaptureResult {
    pub samples: Vec<f64>,
    pub outcome: ExitOutcome,
}

/// Summary statistics over the filtered sample sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub mean: f64,
    pub low: f64,
    pub high: f64,
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn clean_exit() {
        let status = ExitStatus::from_raw(0);
        assert_eq!(ExitOutcome::from_status(status), ExitOutcome::Clean);
    }

    #[test]
    fn nonzero_exit_code() {
        // Wait status encodes the exit code in the high byte.
        let status = ExitStatus::from_raw(2 << 8);
        assert_eq!(ExitOutcome::from_status(status), ExitOutcome::Code(2));
    }

    #[test]
    fn signal_termination() {
        let status = ExitStatus::from_raw(9);
        assert_eq!(ExitOutcome::from_status(status), ExitOutcome::Signaled(9));
    }
}
