//! Conversion of probability queries into concrete intervals of integration.
//!
//! A [`Relation`] describes a condition on the random variable ("less than
//! `x`", "between `a` and `b`", ...). Given the bounds of a distribution's
//! support, it resolves to a half-open [`Interval`] $`[l, u)`$ clipped to
//! that support. Endpoints falling outside the support are never rejected,
//! since there is no probability mass out there anyway.

use std::{
    fmt,
    ops::{
        Range,
        RangeFrom,
        RangeTo,
    },
};

/// Provides methods for controlling iteration over a specific region.
pub trait Region {
    type Domain;

    fn clamp(&self, x: Self::Domain) -> Self::Domain;
}

/// A condition on a continuous random variable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Relation {
    /// $`X < x`$
    LessThan(f64),

    /// $`X \geq x`$
    GreaterThan(f64),

    /// $`a \leq X < b`$
    Between(f64, f64),

    /// $`X = x`$, which always has zero probability
    EqualTo(f64),
}

impl From<RangeTo<f64>> for Relation {
    fn from(range: RangeTo<f64>) -> Self {
        return Relation::LessThan(range.end);
    }
}

impl From<RangeFrom<f64>> for Relation {
    fn from(range: RangeFrom<f64>) -> Self {
        return Relation::GreaterThan(range.start);
    }
}

impl From<Range<f64>> for Relation {
    fn from(range: Range<f64>) -> Self {
        return Relation::Between(range.start, range.end);
    }
}

impl Relation {
    /// Resolve to an interval $`[l, u)`$ clipped to $`[min, max]`$.
    ///
    /// Any query carrying no mass maps to [`Interval::EMPTY`]: `EqualTo`,
    /// `Between(a, b)` with `a > b`, and any relation whose clipped interval
    /// is empty, i.e. one lying wholly outside the support or with a NaN
    /// endpoint. Clipping must never collapse such a query onto a single
    /// edge, since the integrator samples its upper limit inclusively.
    pub fn to_interval(&self, min: f64, max: f64) -> Interval {
        let support = Interval::new(min, max);
        let clipped: Interval = match *self {
            Relation::LessThan(x)
                => Interval::new(min, support.clamp(x)),
            Relation::GreaterThan(x)
                => Interval::new(support.clamp(x), max),
            Relation::Between(a, b) if a > b
                => Interval::EMPTY,
            Relation::Between(a, b)
                => Interval::new(support.clamp(a), support.clamp(b)),
            Relation::EqualTo(_)
                => Interval::EMPTY,
        };
        return if clipped.is_empty() { Interval::EMPTY } else { clipped };
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Relation::LessThan(x) => write!(f, "X < {}", x),
            Relation::GreaterThan(x) => write!(f, "X >= {}", x),
            Relation::Between(a, b) => write!(f, "{} <= X < {}", a, b),
            Relation::EqualTo(x) => write!(f, "X = {}", x),
        };
    }
}

/// A half-open interval $`[l, u)`$ of real numbers.
///
/// No ordering is imposed on the endpoints; an interval with `lower > upper`
/// contains nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    /// Degenerate interval assigned to point queries.
    pub const EMPTY: Interval
        = Interval { lower: f64::INFINITY, upper: f64::NEG_INFINITY };

    pub fn new(lower: f64, upper: f64) -> Self { Self { lower, upper } }

    /// Endpoints as a `(lower, upper)` pair.
    pub fn bounds(&self) -> (f64, f64) { (self.lower, self.upper) }

    /// Return `true` if no real number lies in the interval. This includes
    /// intervals with a NaN endpoint.
    pub fn is_empty(&self) -> bool { !(self.lower < self.upper) }
}

impl From<Range<f64>> for Interval {
    fn from(range: Range<f64>) -> Self {
        return Interval::new(range.start, range.end);
    }
}

impl Region for Interval {
    type Domain = f64;

    /// Clip `x` into $`[l, u]`$. The upper endpoint is kept inclusive so that
    /// a clipped bound still lands on the support's edge. NaN passes through
    /// unchanged.
    fn clamp(&self, x: f64) -> f64 {
        return if x < self.lower {
            self.lower
        } else if x > self.upper {
            self.upper
        } else {
            x
        };
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "[{}, {})", self.lower, self.upper);
    }
}
