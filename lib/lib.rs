#![allow(non_snake_case)]
#![allow(clippy::needless_return)]

//! A continuous random variable defined by a probability density over a
//! bounded support, with probabilities, expectation values, and variances
//! computed by fixed-step numerical integration.
//!
//! ```
//! use contvar::math::{
//!     approx::approx_equals,
//!     probability::Continuous,
//!     range::Relation,
//! };
//!
//! let uniform = Continuous::new(0.0, 1.0, |_| 1.0);
//! assert!(approx_equals(uniform.distribution(Relation::LessThan(1.0)), 1.0));
//! assert!((uniform.distribution(..0.5) - 0.5).abs() < 0.01);
//! assert_eq!(uniform.probability_of(0.5), 0.0);
//! ```

pub mod error;

#[cfg(feature = "config")]
pub mod config;

pub mod math;
