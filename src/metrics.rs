use crate::model::SampleSummary;

/// Arithmetic mean of the samples. `None` when `values` is empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Percentile with linear interpolation between adjacent ranks.
///
/// `None` when `values` is empty; a single sample is its own percentile
/// for every `pct`.
pub fn percentile(values: &[f64], pct: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n == 1 {
        return Some(sorted[0]);
    }
    let rank = pct / 100.0 * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(n - 1);
    let fraction = rank - lower as f64;
    Some(sorted[lower] + fraction * (sorted[upper] - sorted[lower]))
}

/// One-sided outlier filter: keep values strictly below `dist` times the
/// mean of the unfiltered sequence. Values far below the mean always
/// survive, negative values included.
pub fn remove_outliers(values: &[f64], dist: f64) -> Vec<f64> {
    match mean(values) {
        Some(avg) => values.iter().copied().filter(|v| *v < dist * avg).collect(),
        None => Vec::new(),
    }
}

/// Compute mean and low/high percentiles over already-filtered samples.
pub fn compute_summary(values: &[f64], low_pct: f64, high_pct: f64) -> Option<SampleSummary> {
    Some(SampleSummary {
        mean: mean(values)?,
        low: percentile(values, low_pct)?,
        high: percentile(values, high_pct)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_samples() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 100.0]), Some(26.5));
        assert_eq!(mean(&[42.0]), Some(42.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn percentile_interpolates_between_ranks() {
        let values = vec![10.0, 20.0, 30.0, 40.0, 50.0];
        assert!((percentile(&values, 5.0).unwrap() - 12.0).abs() < 1e-9);
        assert!((percentile(&values, 95.0).unwrap() - 48.0).abs() < 1e-9);
        assert!((percentile(&values, 50.0).unwrap() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn percentile_sorts_its_input() {
        let values = vec![50.0, 10.0, 40.0, 20.0, 30.0];
        assert!((percentile(&values, 95.0).unwrap() - 48.0).abs() < 1e-9);
    }

    #[test]
    fn percentile_single_sample() {
        assert_eq!(percentile(&[7.5], 5.0), Some(7.5));
        assert_eq!(percentile(&[7.5], 95.0), Some(7.5));
    }

    #[test]
    fn percentile_empty() {
        assert_eq!(percentile(&[], 50.0), None);
    }

    #[test]
    fn outlier_filter_removes_large_values() {
        // Raw mean 26.5, threshold 79.5: only 100.0 goes.
        let kept = remove_outliers(&[1.0, 2.0, 3.0, 100.0], 3.0);
        assert_eq!(kept, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn outlier_threshold_is_strict() {
        // Raw mean 3.0, threshold 9.0: a value exactly at the threshold
        // is discarded.
        let kept = remove_outliers(&[1.0, 1.0, 1.0, 9.0], 3.0);
        assert_eq!(kept, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn outlier_filter_is_one_sided() {
        // A huge negative value drags the mean (and the threshold) below
        // zero; the small positive values all land above it and only the
        // negative sample survives. The filter never removes low values.
        let kept = remove_outliers(&[-1000.0, 1.0, 2.0, 3.0], 3.0);
        assert_eq!(kept, vec![-1000.0]);
    }

    #[test]
    fn nan_sample_poisons_the_filter() {
        // A NaN sample makes the raw mean NaN, so every strict comparison
        // against the threshold fails and nothing survives.
        let kept = remove_outliers(&[1.0, f64::NAN, 2.0], 3.0);
        assert!(kept.is_empty());
    }

    #[test]
    fn summary_of_filtered_samples() {
        let summary = compute_summary(&[1.0, 2.0, 3.0], 5.0, 95.0).unwrap();
        assert!((summary.mean - 2.0).abs() < 1e-9);
        assert!((summary.low - 1.1).abs() < 1e-9);
        assert!((summary.high - 2.9).abs() < 1e-9);
    }

    #[test]
    fn summary_of_empty_samples() {
        assert_eq!(compute_summary(&[], 5.0, 95.0), None);
    }
}
