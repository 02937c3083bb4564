//! Provides a continuous random variable described by a probability density
//! over a bounded support, with probabilities and moments computed by
//! numerical integration. In most realistic use-cases where the distribution
//! has a closed form, one should reach for [statrs] instead.
//!
//! All queries go through the fixed-step Riemann sum in
//! [`integrate`][crate::math::integrate], so every result is an approximation
//! whose quality is governed by the distribution's step size. The density
//! provided by the user is taken at face value: it is never checked for
//! non-negativity or normalization unless [`Continuous::check_normalization`]
//! is called explicitly, and NaNs produced by it propagate unchanged.
//!
//! [statrs]: https://github.com/statrs-dev/statrs

use std::fmt;
use ndarray as nd;
use tracing::{
    debug,
    trace,
};
use crate::{
    mkerr,
    math::{
        approx::approx_equals,
        integrate::{
            riemann_sum,
            riemann_prog,
        },
        range::{
            Interval,
            Relation,
        },
    },
};

mkerr!(
    NormError : {
        NotNormalized => "density does not integrate to one over its support",
    }
);
pub type NormResult<T> = Result<T, NormError>;

/// Integration step used when none is given.
pub const DEFAULT_STEP_SIZE: f64 = 0.01;

/// A random continuous variable with density `F` supported on $`[a, b)`$.
///
/// The density is expected to integrate to one over the support; this is
/// the caller's responsibility. Values are immutable after construction, so
/// a `Continuous` can be shared freely across threads whenever `F` can.
#[derive(Clone)]
pub struct Continuous<F>
where F: Fn(f64) -> f64
{
    min: f64,
    max: f64,
    step_size: f64,
    density: F,
}

impl<F> fmt::Debug for Continuous<F>
where F: Fn(f64) -> f64
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return f.debug_struct("Continuous")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step_size", &self.step_size)
            .finish_non_exhaustive();
    }
}

impl<F> Continuous<F>
where F: Fn(f64) -> f64
{
    /// Construct from support bounds and a density, integrating with
    /// [`DEFAULT_STEP_SIZE`].
    pub fn new(min: f64, max: f64, density: F) -> Self {
        return Self::with_step(min, max, DEFAULT_STEP_SIZE, density);
    }

    /// Construct with an explicit integration step.
    ///
    /// Nothing is validated here. Each query costs about
    /// `(max - min) / step_size` density evaluations, so a step that is tiny
    /// (or zero) relative to the support makes queries slow (or never
    /// return).
    pub fn with_step(min: f64, max: f64, step_size: f64, density: F) -> Self {
        return Self { min, max, step_size, density };
    }

    /// Return a copy of `self` integrating with a different step.
    pub fn with_step_size(self, step_size: f64) -> Self {
        return Self { step_size, ..self };
    }

    pub fn min(&self) -> f64 { self.min }

    pub fn max(&self) -> f64 { self.max }

    pub fn step_size(&self) -> f64 { self.step_size }

    /// The support $`[a, b)`$.
    pub fn support(&self) -> Interval { Interval::new(self.min, self.max) }

    /// Pass-through method to access the density.
    pub fn pdf(&self, x: f64) -> f64 { (self.density)(x) }

    fn integrate<G>(&self, range: Interval, g: G) -> f64
    where G: Fn(f64) -> f64
    {
        return riemann_sum(
            range.bounds(), g, self.step_size, self.min, self.max);
    }

    /// Probability that the variable takes exactly the value `x`.
    ///
    /// This is identically zero for any continuous variable; no integration
    /// is performed.
    pub fn probability_of(&self, _x: f64) -> f64 { 0.0 }

    /// Approximate the probability that the variable satisfies `relation`.
    ///
    /// The relation is resolved against the support (see
    /// [`Relation::to_interval`]) and the density summed over the resulting
    /// interval. Point relations, inverted ranges, relations lying wholly
    /// outside the support, and NaN endpoints all give exactly zero.
    pub fn distribution<R>(&self, relation: R) -> f64
    where R: Into<Relation>
    {
        let relation: Relation = relation.into();
        if let Relation::EqualTo(x) = relation {
            return self.probability_of(x);
        }
        let range: Interval = relation.to_interval(self.min, self.max);
        let p: f64 = self.integrate(range, &self.density);
        trace!(
            %relation,
            %range,
            step = self.step_size,
            p,
            "distribution query"
        );
        return p;
    }

    /// Approximate the cumulative distribution function $`P(X < x)`$.
    pub fn cdf(&self, x: f64) -> f64 {
        return self.distribution(Relation::LessThan(x));
    }

    /// Approximate the total probability over the support, which should be
    /// close to one for a well-formed density.
    pub fn total_probability(&self) -> f64 {
        return self.distribution(Relation::LessThan(self.max));
    }

    /// Approximate the expectation value $`E[h(X)]`$ of `transform` $`= h`$.
    pub fn expected<T>(&self, transform: T) -> f64
    where T: Fn(f64) -> f64
    {
        let e: f64
            = self.integrate(
                self.support(),
                |x: f64| transform(x) * (self.density)(x),
            );
        trace!(step = self.step_size, e, "expectation query");
        return e;
    }

    /// Approximate the mean $`E[X]`$.
    pub fn mean(&self) -> f64 { self.expected(|x| x) }

    /// Approximate the variance of `transform` $`= h`$,
    /// ```math
    /// \int_a^b \big(h(x) - E[h(X)]\big)^2 f(x) \,dx.
    /// ```
    ///
    /// The same `transform` is used both to compute the center $`E[h(X)]`$
    /// and inside the squared deviation, so this is the variance of the
    /// transformed variable $`h(X)`$ and only equals the variance of $`X`$
    /// itself when `transform` is the identity.
    pub fn variance<T>(&self, transform: T) -> f64
    where T: Fn(f64) -> f64
    {
        let e: f64 = self.expected(&transform);
        let v: f64
            = self.integrate(
                self.support(),
                |x: f64| (transform(x) - e).powi(2) * (self.density)(x),
            );
        trace!(step = self.step_size, e, v, "variance query");
        return v;
    }

    /// Square root of [`Self::variance`].
    pub fn std_dev<T>(&self, transform: T) -> f64
    where T: Fn(f64) -> f64
    {
        return self.variance(transform).sqrt();
    }

    /// Tabulate the cumulative distribution over the support.
    ///
    /// Returns the sampling grid along with the running probability at each
    /// point (inclusive of that point's own sample), in the same way as
    /// [`riemann_prog`].
    pub fn cdf_table(&self) -> (nd::Array1<f64>, nd::Array1<f64>) {
        return riemann_prog(
            (self.min, self.max),
            &self.density,
            self.step_size,
            self.min,
            self.max,
        );
    }

    /// Check that the density integrates to one over the support, to within
    /// [`APPROX_TOLERANCE`][crate::math::approx::APPROX_TOLERANCE], returning
    /// the computed total if so.
    pub fn check_normalization(&self) -> NormResult<f64> {
        let total: f64 = self.total_probability();
        return if approx_equals(total, 1.0) {
            Ok(total)
        } else {
            debug!(
                total,
                min = self.min,
                max = self.max,
                step = self.step_size,
                "density failed normalization check"
            );
            Err(NormError::NotNormalized)
        };
    }
}
