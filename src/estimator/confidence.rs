// Confidence-level selection for interval estimation
//
// The set is closed by construction: callers pick one of three levels, so an
// "unknown confidence level" cannot reach the critical-value lookup.

use serde::{Deserialize, Serialize};

/// Two-tailed confidence level for the interval estimate
///
/// Drives the alpha used for the critical-value lookup:
/// `alpha = (100 - percent) / 100`.
///
/// # Example
/// ```
/// use medir::ConfidenceLevel;
///
/// assert_eq!(ConfidenceLevel::P95.percent(), 95);
/// assert_eq!(ConfidenceLevel::P90.alpha(), 0.10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// 80% confidence (alpha = 0.20)
    P80,
    /// 90% confidence (alpha = 0.10)
    P90,
    /// 95% confidence (alpha = 0.05)
    P95,
}

impl ConfidenceLevel {
    /// All levels, ordered by increasing confidence
    pub const ALL: [ConfidenceLevel; 3] = [
        ConfidenceLevel::P80,
        ConfidenceLevel::P90,
        ConfidenceLevel::P95,
    ];

    /// Confidence level as a percentage
    pub fn percent(self) -> u8 {
        match self {
            ConfidenceLevel::P80 => 80,
            ConfidenceLevel::P90 => 90,
            ConfidenceLevel::P95 => 95,
        }
    }

    /// Two-tailed significance level (alpha)
    pub fn alpha(self) -> f64 {
        match self {
            ConfidenceLevel::P80 => 0.20,
            ConfidenceLevel::P90 => 0.10,
            ConfidenceLevel::P95 => 0.05,
        }
    }
}
