//! Common types for proportion intervals

use std::fmt;

/// A symmetric confidence interval for a binomial proportion
///
/// Stored as a center and half-width rather than explicit bounds. The
/// Agresti-Coull interval is symmetric around its adjusted center, which is
/// generally not the raw proportion `x / n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionInterval {
    /// Center of the interval (the adjusted proportion estimate)
    pub center: f64,
    /// Half-width of the interval (margin of error)
    pub half_width: f64,
}

impl ProportionInterval {
    /// Create a new proportion interval
    pub fn new(center: f64, half_width: f64) -> Self {
        Self { center, half_width }
    }

    /// Lower bound of the interval
    ///
    /// Bounds are not clamped to [0, 1]; extreme counts at small sample
    /// sizes can place them slightly outside the unit interval.
    pub fn lower(&self) -> f64 {
        self.center - self.half_width
    }

    /// Upper bound of the interval
    pub fn upper(&self) -> f64 {
        self.center + self.half_width
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        2.0 * self.half_width
    }

    /// Check if a proportion is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower() && value <= self.upper()
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &ProportionInterval) -> bool {
        self.lower() <= other.upper() && other.lower() <= self.upper()
    }
}

impl fmt::Display for ProportionInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} ± {:.4}", self.center, self.half_width)
    }
}
