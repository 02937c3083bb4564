//! Collection of numerical routines and related constructs.

pub mod approx;
pub mod range;
pub mod integrate;
pub mod probability;
