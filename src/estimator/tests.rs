// Comprehensive tests for the full parse -> estimate pipeline
//
// - Exercise realistic task-duration inputs, messy text included
// - Validate the interval against hand-checked log-space arithmetic
// - Ensure the insufficient-sample outcome stays distinguishable from empty

use super::*;
use crate::parser::parse;

/// Realistic scenario: five task-completion timings pasted from a stopwatch
/// log, one per line, 95% confidence.
#[test]
fn test_stopwatch_log_end_to_end() {
    let raw = "122\n293\n203\n156\n89\n";
    let sample = parse(raw);
    assert_eq!(sample.len(), 5);

    let result = estimate(&sample, ConfidenceLevel::P95).unwrap();
    assert_eq!(result.degrees_of_freedom, 4);
    assert_eq!(result.t_critical, 2.776);

    // Interval is asymmetric around the geometric mean in the raw scale
    let below = result.geometric_mean - result.ci_low;
    let above = result.ci_high - result.geometric_mean;
    assert!(below > 0.0 && above > 0.0);
    assert!(above > below);

    // But symmetric in log space
    let log_below = result.log_mean - result.ci_low.ln();
    let log_above = result.ci_high.ln() - result.log_mean;
    assert!((log_below - log_above).abs() < 1e-9);
    assert!((log_below - result.margin_in_log_space).abs() < 1e-9);
}

/// Messy input: units, blank lines and typos mixed in. The estimator sees
/// only the clean observations.
#[test]
fn test_messy_input_is_cleaned_before_estimation() {
    let raw = "\n98 seconds\nabout a minute\n112\n\n87s\n0\n103 (retry)\n";
    let sample = parse(raw);

    let values: Vec<f64> = sample.values().collect();
    assert_eq!(values, vec![98.0, 112.0, 87.0, 103.0]);

    let result = estimate(&sample, ConfidenceLevel::P90).unwrap();
    assert_eq!(result.n, 4);
    assert_eq!(result.degrees_of_freedom, 3);
    assert_eq!(result.t_critical, 2.353);
}

/// One valid line among garbage: a sample exists but no estimate does.
/// Callers distinguish this (n = 1) from an empty parse (n = 0).
#[test]
fn test_single_survivor_yields_no_estimate() {
    let sample = parse("garbage\n-3\n45\n");
    assert_eq!(sample.len(), 1);
    assert!(estimate(&sample, ConfidenceLevel::P95).is_none());

    let empty = parse("garbage\n-3\n");
    assert!(empty.is_empty());
    assert!(estimate(&empty, ConfidenceLevel::P95).is_none());
}

/// Larger sample: 12 observations put df = 11 into the 15-anchor bucket.
#[test]
fn test_df_bucketing_reaches_estimator() {
    let raw = (1..=12)
        .map(|i| format!("{}", 60 + i * 7))
        .collect::<Vec<_>>()
        .join("\n");
    let sample = parse(&raw);
    assert_eq!(sample.len(), 12);

    let result = estimate(&sample, ConfidenceLevel::P95).unwrap();
    assert_eq!(result.degrees_of_freedom, 11);
    assert_eq!(result.t_critical, 2.131);
}

/// Changing only the confidence level keeps every sample-derived statistic
/// fixed and moves only the t multiplier and the interval.
#[test]
fn test_confidence_level_change_recomputes_interval_only() {
    let sample = parse("31\n44\n52\n67\n80\n95");

    let narrow = estimate(&sample, ConfidenceLevel::P80).unwrap();
    let wide = estimate(&sample, ConfidenceLevel::P95).unwrap();

    assert_eq!(narrow.log_mean, wide.log_mean);
    assert_eq!(narrow.log_sd, wide.log_sd);
    assert_eq!(narrow.geometric_mean, wide.geometric_mean);
    assert_eq!(narrow.arithmetic_mean, wide.arithmetic_mean);
    assert!(narrow.t_critical < wide.t_critical);
    assert!(narrow.interval_width() < wide.interval_width());
    assert!(wide.ci_low < narrow.ci_low);
    assert!(narrow.ci_high < wide.ci_high);
}

/// Sub-second durations: values below 1 have negative logs, which must flow
/// through the same arithmetic unchanged.
#[test]
fn test_sub_second_durations() {
    let sample = parse("0.25\n0.4\n0.31\n0.55");
    let result = estimate(&sample, ConfidenceLevel::P95).unwrap();

    assert!(result.log_mean < 0.0);
    assert!(result.geometric_mean > 0.0);
    assert!(result.ci_low > 0.0);
    assert!(result.ci_low <= result.geometric_mean);
    assert!(result.geometric_mean <= result.ci_high);
}
