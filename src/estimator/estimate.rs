// Geometric-mean estimation with a log-space confidence interval
//
// All statistics run on ln-transformed values; the interval is exponentiated
// back at the end, so it is asymmetric around the geometric mean in the
// original scale. The arithmetic mean is carried alongside for comparison
// only and plays no part in the interval.

use crate::estimator::{t_critical, ConfidenceLevel};
use crate::parser::Sample;
use serde::{Deserialize, Serialize};

/// Full output record of one estimation
///
/// Produced fresh on every call; never updated incrementally. Holds the
/// intermediate log-space statistics as well as the final interval so that
/// callers can display or audit any step of the derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Sample size
    pub n: usize,
    /// exp(mean(ln(values))) - the central-tendency estimate
    pub geometric_mean: f64,
    /// mean(values) - for comparison/display only
    pub arithmetic_mean: f64,
    /// Mean of the ln-transformed values
    pub log_mean: f64,
    /// Sample standard deviation (Bessel-corrected) of the ln-transformed values
    pub log_sd: f64,
    /// log_sd / sqrt(n)
    pub standard_error_of_log_mean: f64,
    /// n - 1
    pub degrees_of_freedom: usize,
    /// Two-tailed Student's-t critical value used for the margin
    pub t_critical: f64,
    /// t_critical * standard_error_of_log_mean
    pub margin_in_log_space: f64,
    /// exp(log_mean - margin_in_log_space)
    pub ci_low: f64,
    /// exp(log_mean + margin_in_log_space)
    pub ci_high: f64,
    /// Confidence level the interval was computed for
    pub confidence_level: ConfidenceLevel,
}

impl EstimationResult {
    /// Width of the interval in the original (seconds) scale
    pub fn interval_width(&self) -> f64 {
        self.ci_high - self.ci_low
    }
}

/// Estimate the geometric mean and its confidence interval for a sample
///
/// Returns `None` when the sample holds fewer than two observations: the
/// variance (and with it the standard error) is undefined, so no interval
/// can be produced. That is an expected outcome the caller distinguishes
/// from an empty sample, not a failure.
///
/// Pure and idempotent: identical inputs yield a bit-identical result.
///
/// # Example
/// ```
/// use medir::{estimate, parse, ConfidenceLevel};
///
/// let sample = parse("122\n293\n203\n156\n89");
/// let result = estimate(&sample, ConfidenceLevel::P95).unwrap();
/// assert_eq!(result.n, 5);
/// assert_eq!(result.degrees_of_freedom, 4);
/// assert_eq!(result.t_critical, 2.776);
/// assert!(result.ci_low <= result.geometric_mean);
/// assert!(result.geometric_mean <= result.ci_high);
/// ```
pub fn estimate(sample: &Sample, level: ConfidenceLevel) -> Option<EstimationResult> {
    let n = sample.len();
    if n < 2 {
        return None;
    }

    let log_times: Vec<f64> = sample.values().map(f64::ln).collect();
    let log_mean = mean(&log_times);

    let log_variance = log_times
        .iter()
        .map(|x| (x - log_mean).powi(2))
        .sum::<f64>()
        / (n - 1) as f64;
    let log_sd = log_variance.sqrt();
    let standard_error_of_log_mean = log_sd / (n as f64).sqrt();

    let degrees_of_freedom = n - 1;
    let t = t_critical(degrees_of_freedom, level);
    let margin_in_log_space = t * standard_error_of_log_mean;

    let raw_values: Vec<f64> = sample.values().collect();

    Some(EstimationResult {
        n,
        geometric_mean: log_mean.exp(),
        arithmetic_mean: mean(&raw_values),
        log_mean,
        log_sd,
        standard_error_of_log_mean,
        degrees_of_freedom,
        t_critical: t,
        margin_in_log_space,
        ci_low: (log_mean - margin_in_log_space).exp(),
        ci_high: (log_mean + margin_in_log_space).exp(),
        confidence_level: level,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
