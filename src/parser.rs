//! Raw-text parsing into a validated duration sample
//!
//! Input is a freeform text blob, one measurement per line. Lines that do not
//! carry a positive finite number are silently dropped: this is a deliberate
//! data-cleaning policy, not an error path. A line like `"5 seconds"` still
//! counts as `5.0` because only the leading numeric prefix is parsed.

use serde::{Deserialize, Serialize};

/// One parsed data point (a duration in seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Measured value in seconds, strictly positive
    pub value: f64,
    /// 1-based line in the original input, for traceability only
    pub source_line: usize,
}

/// Ordered sequence of observations feeding one estimation
///
/// Invariant: every value is strictly positive, so the log transform in the
/// estimator is always defined. Order matches the order of valid lines in the
/// input; there is no deduplication and no sorting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    observations: Vec<Observation>,
}

impl Sample {
    /// Number of observations (`n`)
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// True when the sample holds no observations
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The observations in input order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Iterator over the raw values in input order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.observations.iter().map(|obs| obs.value)
    }
}

impl FromIterator<Observation> for Sample {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self {
            observations: iter.into_iter().collect(),
        }
    }
}

/// Parse a raw text blob into a [`Sample`]
///
/// Splits on newlines, trims each line, and accepts a line only when its
/// leading numeric prefix parses to a finite value strictly greater than
/// zero. Blank lines, unparseable lines, zeros and negatives are dropped
/// without raising anything.
///
/// # Example
/// ```
/// use medir::parser::parse;
///
/// let sample = parse("122\n0\n-5\nabc\n50.5\n");
/// let values: Vec<f64> = sample.values().collect();
/// assert_eq!(values, vec![122.0, 50.5]);
/// assert_eq!(sample.observations()[1].source_line, 5);
/// ```
pub fn parse(raw_text: &str) -> Sample {
    raw_text
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let value = leading_float(trimmed)?;
            if !value.is_finite() || value <= 0.0 {
                return None;
            }
            Some(Observation {
                value,
                source_line: index + 1,
            })
        })
        .collect()
}

/// Parse the leading floating-point prefix of `text`
///
/// Mirrors the lenient numeric-prefix semantics of typical text-field input
/// handling: an optional sign, digits with at most one decimal point, and an
/// optional exponent. Trailing non-numeric content is ignored; fully
/// non-numeric content yields `None`.
fn leading_float(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }

    // Exponent is consumed only when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}
