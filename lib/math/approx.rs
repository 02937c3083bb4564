//! Tolerance-based floating-point comparison.
//!
//! [`approx_equals`] is meant for checks like "this density integrates to
//! one"; nothing in the integrators themselves depends on it.

/// Absolute tolerance used by [`approx_equals`].
pub const APPROX_TOLERANCE: f64 = 0.001;

/// Provides methods for determining whether a quantity (or the distance
/// between two quantities) falls under some threshold.
pub trait Epsilon {
    fn lt_eps(&self, eps: f64) -> bool;
}

impl Epsilon for f64 {
    fn lt_eps(&self, eps: f64) -> bool { self.abs() < eps }
}

impl Epsilon for (f64, f64) {
    fn lt_eps(&self, eps: f64) -> bool { (self.1 - self.0).abs() < eps }
}

/// Return `true` if $`|a - b| < 0.001`$, `false` otherwise.
///
/// The comparison is symmetric but **not** transitive: `a ~ b` and `b ~ c` do
/// not imply `a ~ c`. Any NaN argument makes the result `false`.
pub fn approx_equals(a: f64, b: f64) -> bool {
    return (a, b).lt_eps(APPROX_TOLERANCE);
}

/// Like [`approx_equals`], but with a caller-chosen (strict) tolerance.
pub fn approx_equals_eps(a: f64, b: f64, eps: f64) -> bool {
    return (a, b).lt_eps(eps);
}
