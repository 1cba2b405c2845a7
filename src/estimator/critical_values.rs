// Fixed two-tailed Student's-t critical-value table
//
// A discrete table plus a bucketing policy stands in for the t-distribution's
// inverse CDF. Within each band above df = 10 the next larger tabulated
// anchor is used; the band boundaries are part of the estimator's contract,
// not an implementation detail.

use crate::estimator::ConfidenceLevel;

/// Degrees-of-freedom anchors present in the table
const DF_ANCHORS: [usize; 14] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 20, 25, 30];

/// Two-tailed critical values, rows aligned with `DF_ANCHORS`,
/// columns: alpha = 0.20, 0.10, 0.05
const T_TABLE: [[f64; 3]; 14] = [
    [3.078, 6.314, 12.706], // df = 1
    [1.886, 2.920, 4.303],  // df = 2
    [1.638, 2.353, 3.182],  // df = 3
    [1.533, 2.132, 2.776],  // df = 4
    [1.476, 2.015, 2.571],  // df = 5
    [1.440, 1.943, 2.447],  // df = 6
    [1.415, 1.895, 2.365],  // df = 7
    [1.397, 1.860, 2.306],  // df = 8
    [1.383, 1.833, 2.262],  // df = 9
    [1.372, 1.812, 2.228],  // df = 10
    [1.341, 1.753, 2.131],  // df = 15
    [1.325, 1.725, 2.086],  // df = 20
    [1.316, 1.708, 2.060],  // df = 25
    [1.310, 1.697, 2.042],  // df = 30
];

/// Fallback when a (df, alpha) cell is missing: the (30, 0.05) entry
const FALLBACK_T: f64 = 2.042;

/// Look up the two-tailed Student's-t critical value
///
/// Bucketing policy for degrees of freedom above the dense part of the table:
/// - `df <= 10`: used directly
/// - `10 < df <= 15`: bucketed to 15
/// - `15 < df <= 20`: bucketed to 20
/// - `20 < df <= 25`: bucketed to 25
/// - `df > 25`: bucketed to 30
///
/// Total over its domain (`df >= 1`); a table miss falls back to 2.042
/// rather than failing.
///
/// # Example
/// ```
/// use medir::{t_critical, ConfidenceLevel};
///
/// assert_eq!(t_critical(4, ConfidenceLevel::P95), 2.776);
/// assert_eq!(t_critical(11, ConfidenceLevel::P95), 2.131);
/// ```
pub fn t_critical(degrees_of_freedom: usize, level: ConfidenceLevel) -> f64 {
    let df_key = bucket_df(degrees_of_freedom);
    let column = alpha_column(level);

    match DF_ANCHORS.iter().position(|&anchor| anchor == df_key) {
        Some(row) => T_TABLE[row][column],
        None => {
            // Unreachable for df >= 1 given the bucketing policy, but the
            // lookup must never fail
            tracing::warn!(
                degrees_of_freedom,
                df_key,
                "critical-value table miss, using fallback t = {}",
                FALLBACK_T
            );
            FALLBACK_T
        }
    }
}

/// Map degrees of freedom onto a tabulated anchor
fn bucket_df(df: usize) -> usize {
    match df {
        0..=10 => df,
        11..=15 => 15,
        16..=20 => 20,
        21..=25 => 25,
        _ => 30,
    }
}

/// Column index for a confidence level's alpha
fn alpha_column(level: ConfidenceLevel) -> usize {
    match level {
        ConfidenceLevel::P80 => 0,
        ConfidenceLevel::P90 => 1,
        ConfidenceLevel::P95 => 2,
    }
}
