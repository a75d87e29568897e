//! Agresti-Coull confidence intervals for binomial proportions
//!
//! This crate estimates the confidence interval for a binomial proportion
//! from a sample size and an observed success count, returned as a center
//! and half-width. Inputs may be scalars or paired sequences; sequence
//! results preserve input length and order, and a lone scalar broadcasts
//! across the paired sequence.
//!
//! Reference: Agresti, A., & Coull, B. A. (1998). Approximate is better than
//! "exact" for interval estimation of binomial proportions. The American
//! Statistician, 52(2), 119-126.
//!
//! # Overview
//!
//! The plain Wald interval `x/n ± z·sqrt(x/n·(1 - x/n)/n)` undercovers badly
//! for small samples and for proportions near 0 or 1. Agresti and Coull
//! showed that augmenting the sample with z² pseudo-trials, half of them
//! successes, before computing the Wald-style interval restores
//! close-to-nominal coverage while keeping a closed form. With the default
//! multiplier `z = 2.0` (≈ 95% confidence) this is the "add two successes
//! and two failures" rule.
//!
//! The interval is undefined for an empty sample: estimates for `n <= 0`
//! come back as `None` rather than an error, and the floating projections of
//! a batch report such entries as NaN.
//!
//! # Examples
//!
//! ## Single proportion
//!
//! ```rust
//! use binomial_confidence::agresti_coull;
//!
//! // 21 conversions out of 50 trials
//! let interval = agresti_coull().estimate(50u64, 21u64).unwrap().unwrap();
//! assert!((interval.center - 23.0 / 54.0).abs() < 1e-10);
//! println!("{}", interval); // 0.4259 ± 0.1346
//! ```
//!
//! ## Broadcasting across sequences
//!
//! ```rust
//! use binomial_confidence::{agresti_coull, Estimates};
//!
//! let trials = vec![120.0, 80.0, 200.0];
//! let successes = vec![30.0, 19.0, 52.0];
//!
//! let result = agresti_coull()
//!     .estimate_broadcast(trials, successes)
//!     .unwrap();
//! match result {
//!     Estimates::Many(batch) => assert_eq!(batch.len(), 3),
//!     Estimates::One(_) => unreachable!(),
//! }
//! ```

mod broadcast;
mod error;
mod estimator;
mod types;

// Re-exports
pub use broadcast::{Counts, Estimates, IntervalBatch};
pub use error::{Error, Result};
pub use estimator::{AgrestiCoull, DEFAULT_Z};
pub use types::ProportionInterval;

// Convenience constructors
pub fn agresti_coull() -> AgrestiCoull {
    AgrestiCoull::new()
}

pub fn agresti_coull_for_level(confidence_level: f64) -> AgrestiCoull {
    AgrestiCoull::new().with_confidence_level(confidence_level)
}
