#![no_main]

use libfuzzer_sys::fuzz_target;
use medir::{estimate, parse, ConfidenceLevel};

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string; non-UTF-8 inputs are skipped
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must not panic, and every surviving observation must be a
        // finite positive value
        let sample = parse(input);
        for obs in sample.observations() {
            assert!(obs.value.is_finite() && obs.value > 0.0);
        }

        // Estimation over whatever survived must not panic either, and any
        // interval it produces must contain its geometric mean
        for level in ConfidenceLevel::ALL {
            if let Some(result) = estimate(&sample, level) {
                assert!(result.ci_low <= result.geometric_mean);
                assert!(result.geometric_mean <= result.ci_high);
            }
        }
    }
});
