//! Medir - log-space confidence intervals for duration samples
//!
//! This library provides the core functionality for estimating the central
//! tendency of positive, right-skewed duration measurements (e.g., task
//! completion times). Instead of a naive arithmetic mean and standard
//! deviation, it computes the geometric mean via log-space statistics and
//! derives a Student's-t confidence interval from a fixed critical-value
//! table.
//!
//! Two pure components, no shared state and no I/O:
//! - [`parser::parse`] turns a raw text blob into an ordered [`parser::Sample`]
//!   of validated positive observations.
//! - [`estimator::estimate`] turns a sample plus a [`estimator::ConfidenceLevel`]
//!   into an [`estimator::EstimationResult`], or `None` when the sample is too
//!   small for a variance estimate.
//!
//! Presentation concerns (formatting, input widgets, recompute triggers) stay
//! with the caller.

pub mod estimator;
pub mod parser;

pub use estimator::{estimate, t_critical, ConfidenceLevel, EstimationResult};
pub use parser::{parse, Observation, Sample};
