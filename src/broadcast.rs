//! Scalar and sequence broadcasting over the point estimator
//!
//! The entry points mirror the shape of their inputs: scalars in, scalar
//! out; sequences in, a batch of the same length out. A lone scalar paired
//! with a sequence is repeated to match its length, so mixed calls behave
//! like invoking the point estimator once per element.

use crate::error::{Error, Result};
use crate::estimator::{cast, AgrestiCoull};
use crate::types::ProportionInterval;
use num_traits::ToPrimitive;
use tracing::{debug, instrument};

/// A count argument that is either a single value or an ordered sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Counts {
    /// A single count, applied once or broadcast across a paired sequence
    One(f64),
    /// An ordered sequence of counts
    Many(Vec<f64>),
}

impl Counts {
    /// Build a scalar count from any primitive numeric type
    pub fn one<T: ToPrimitive>(value: T) -> Result<Self> {
        Ok(Counts::One(cast(&value, "count")?))
    }

    /// Build a sequence of counts from any primitive numeric slice
    pub fn many<T: ToPrimitive>(values: &[T]) -> Result<Self> {
        let mut counts = Vec::with_capacity(values.len());
        for value in values {
            counts.push(cast(value, "count")?);
        }
        Ok(Counts::Many(counts))
    }
}

impl From<f64> for Counts {
    fn from(value: f64) -> Self {
        Counts::One(value)
    }
}

impl From<u64> for Counts {
    fn from(value: u64) -> Self {
        Counts::One(value as f64)
    }
}

impl From<u32> for Counts {
    fn from(value: u32) -> Self {
        Counts::One(value as f64)
    }
}

impl From<i32> for Counts {
    fn from(value: i32) -> Self {
        Counts::One(value as f64)
    }
}

impl From<usize> for Counts {
    fn from(value: usize) -> Self {
        Counts::One(value as f64)
    }
}

impl From<Vec<f64>> for Counts {
    fn from(values: Vec<f64>) -> Self {
        Counts::Many(values)
    }
}

impl From<&[f64]> for Counts {
    fn from(values: &[f64]) -> Self {
        Counts::Many(values.to_vec())
    }
}

impl From<Vec<u64>> for Counts {
    fn from(values: Vec<u64>) -> Self {
        Counts::Many(values.into_iter().map(|v| v as f64).collect())
    }
}

impl From<&[u64]> for Counts {
    fn from(values: &[u64]) -> Self {
        Counts::Many(values.iter().map(|&v| v as f64).collect())
    }
}

/// Ordered element-wise estimation results
///
/// Entry `i` holds the interval for input pair `i`, or `None` where the
/// interval is undefined (non-positive sample size). Length and order always
/// match the input sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalBatch {
    /// Per-pair results in input order
    pub intervals: Vec<Option<ProportionInterval>>,
}

impl IntervalBatch {
    /// Number of result entries
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the batch has no entries
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterate over per-pair results in input order
    pub fn iter(&self) -> impl Iterator<Item = &Option<ProportionInterval>> {
        self.intervals.iter()
    }

    /// Interval centers in input order, NaN where undefined
    pub fn centers(&self) -> Vec<f64> {
        self.intervals
            .iter()
            .map(|entry| entry.map_or(f64::NAN, |interval| interval.center))
            .collect()
    }

    /// Interval half-widths in input order, NaN where undefined
    pub fn half_widths(&self) -> Vec<f64> {
        self.intervals
            .iter()
            .map(|entry| entry.map_or(f64::NAN, |interval| interval.half_width))
            .collect()
    }
}

/// Estimation result shaped like the input
///
/// Scalar inputs produce a single (possibly undefined) interval; any call
/// involving a sequence produces a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Estimates {
    /// Result of a scalar-scalar call
    One(Option<ProportionInterval>),
    /// Result of a call involving at least one sequence
    Many(IntervalBatch),
}

impl AgrestiCoull {
    /// Estimate intervals for paired sequences of counts
    ///
    /// Pairs `n[i]` with `x[i]` strictly by position. The sequences must
    /// have equal lengths; mismatched inputs are rejected with
    /// [`Error::LengthMismatch`] rather than truncated.
    #[instrument(skip(self, n, x), fields(len = n.len(), z = self.z()))]
    pub fn estimate_each<N, X>(&self, n: &[N], x: &[X]) -> Result<IntervalBatch>
    where
        N: ToPrimitive,
        X: ToPrimitive,
    {
        Error::check_equal_lengths(n.len(), x.len())?;

        let mut intervals = Vec::with_capacity(n.len());
        for (n_i, x_i) in n.iter().zip(x.iter()) {
            intervals.push(self.estimate_f64(
                cast(n_i, "sample size")?,
                cast(x_i, "success count")?,
            )?);
        }
        Ok(IntervalBatch { intervals })
    }

    /// Estimate intervals with scalar-to-sequence broadcasting
    ///
    /// The result mirrors the shape of the inputs: two scalars produce
    /// [`Estimates::One`]; if either argument is a sequence the other is
    /// repeated to match its length and the result is [`Estimates::Many`].
    ///
    /// # Examples
    /// ```
    /// use binomial_confidence::{AgrestiCoull, Estimates};
    ///
    /// let estimator = AgrestiCoull::new();
    /// let result = estimator
    ///     .estimate_broadcast(vec![1.0, 2.0, 3.0], 0.0)
    ///     .unwrap();
    /// match result {
    ///     Estimates::Many(batch) => assert_eq!(batch.len(), 3),
    ///     Estimates::One(_) => unreachable!(),
    /// }
    /// ```
    pub fn estimate_broadcast(
        &self,
        n: impl Into<Counts>,
        x: impl Into<Counts>,
    ) -> Result<Estimates> {
        match (n.into(), x.into()) {
            (Counts::One(n), Counts::One(x)) => Ok(Estimates::One(self.estimate_f64(n, x)?)),
            (Counts::One(n), Counts::Many(x)) => {
                debug!(
                    "Broadcasting sample size {} across {} success counts",
                    n,
                    x.len()
                );
                let n = broadcast(n, x.len());
                Ok(Estimates::Many(self.estimate_each(&n, &x)?))
            }
            (Counts::Many(n), Counts::One(x)) => {
                debug!(
                    "Broadcasting success count {} across {} sample sizes",
                    x,
                    n.len()
                );
                let x = broadcast(x, n.len());
                Ok(Estimates::Many(self.estimate_each(&n, &x)?))
            }
            (Counts::Many(n), Counts::Many(x)) => {
                Ok(Estimates::Many(self.estimate_each(&n, &x)?))
            }
        }
    }
}

/// Repeat a scalar once per element of the paired sequence
fn broadcast(value: f64, len: usize) -> Vec<f64> {
    vec![value; len]
}
