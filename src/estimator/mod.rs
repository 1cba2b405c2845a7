// Log-space central-tendency estimation with Student's-t intervals
//
// This module implements the estimator for right-skewed duration samples:
// statistics are computed on log-transformed values, and the interval is
// exponentiated back into the original scale, giving a geometric mean with an
// asymmetric confidence interval.
//
// Scientific Foundation:
// - Durations are positive and right-skewed; the geometric mean
//   exp(mean(ln x_i)) is the appropriate central-tendency estimate.
// - The interval multiplier is a two-tailed Student's-t critical value taken
//   from a fixed table with a conservative degrees-of-freedom bucketing
//   policy, not from a numerical inverse CDF.
//
// Implementation:
// - Plain f64 arithmetic throughout; results are bit-reproducible for
//   identical inputs.
// - No custom quantile routines - the critical-value table is the design.

mod confidence;
mod critical_values;
mod estimate;

pub use confidence::ConfidenceLevel;
pub use critical_values::t_critical;
pub use estimate::{estimate, EstimationResult};

#[cfg(test)]
mod tests;
