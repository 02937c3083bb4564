//! Provides a fixed-step Riemann sum to integrate functions over a bounded
//! support.
//!
//! Functions are intended to compute integrals of the form
//! ```math
//! \int_l^{\min(u, b)} f(x) \,dx
//! ```
//! (or the progressive form, with a variable upper limit) where $`[a, b)`$ is
//! the support outside of which $`f`$ is taken to vanish.
//!
//! The sum is sampled at $`x_k = l + k \Delta x`$ (accumulated, not
//! multiplied) for every $`x_k \leq \min(u, b)`$, so the sample at the clipped
//! upper limit itself *is* included. This biases results slightly high for
//! increasing integrands, and grid drift from repeated addition is not
//! corrected. Both are accepted properties of the approximation.

use num_traits::Float;
use ndarray as nd;

/// Compute the fixed-step Riemann sum of `f` over `range` $`= (l, u)`$,
/// clipped to the support $`[a, b)`$ given by `support_min` and
/// `support_max`.
///
/// Sample points below `support_min` contribute zero but are still stepped
/// over, so the sampling grid always starts at the lower limit of `range`.
/// An inverted `range` (lower limit above the clipped upper limit) sums to
/// zero without evaluating `f`.
pub fn riemann_sum<X, F>(
    range: (X, X),
    f: F,
    step: X,
    support_min: X,
    support_max: X,
) -> X
where
    X: Float,
    F: Fn(X) -> X,
{
    let (lower, upper): (X, X) = range;
    let upper_eff: X = support_max.min(upper);
    let mut acc: X = X::zero();
    let mut x: X = lower;
    while x <= upper_eff {
        acc = acc + if x >= support_min { f(x) * step } else { X::zero() };
        x = x + step;
    }
    return acc;
}

/// Compute the progressive Riemann sum of `f` over `range`, clipped to the
/// support $`[a, b)`$.
///
/// Returns the sampling grid and, for each point on it, the running sum up to
/// and including that point. Sampling matches [`riemann_sum`], so the last
/// element of the running sum equals `riemann_sum` over the same arguments.
/// Both arrays are empty if `range` is inverted.
pub fn riemann_prog<X, F>(
    range: (X, X),
    f: F,
    step: X,
    support_min: X,
    support_max: X,
) -> (nd::Array1<X>, nd::Array1<X>)
where
    X: Float,
    F: Fn(X) -> X,
{
    let (lower, upper): (X, X) = range;
    let upper_eff: X = support_max.min(upper);
    let mut grid: Vec<X> = Vec::new();
    let mut prog: Vec<X> = Vec::new();
    let mut acc: X = X::zero();
    let mut x: X = lower;
    while x <= upper_eff {
        acc = acc + if x >= support_min { f(x) * step } else { X::zero() };
        grid.push(x);
        prog.push(acc);
        x = x + step;
    }
    return (nd::Array::from(grid), nd::Array::from(prog));
}
