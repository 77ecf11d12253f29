//! Seed-class distribution helpers.
//!
//! The initial dormancy of a seed population is discretised into
//! `n_seed_classes` buckets. Each bucket gets an evenly spaced dormancy value
//! and a population weight drawn from a standard normal density.

use crate::errors::{SeedcastError, SeedcastResult};
use crate::timeseries::FloatValue;
use ndarray::Array1;
use std::f64::consts::PI;

/// Half-width of the standard normal support sampled for class weights.
pub const NORMAL_SUPPORT: FloatValue = 3.0;

/// `n` evenly spaced values from `start` to `stop` inclusive.
///
/// A single point yields `[start]`.
pub fn linspace(start: FloatValue, stop: FloatValue, n: usize) -> Array1<FloatValue> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => Array1::linspace(start, stop, n),
    }
}

/// Standard normal probability density at `x`.
pub fn standard_normal_pdf(x: FloatValue) -> FloatValue {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Relative population weight of each of `n` seed classes.
///
/// The standard normal density is evaluated at `n` evenly spaced points over
/// `[-3, 3]` and normalised so the weights sum to one.
pub fn normal_class_weights(n: usize) -> SeedcastResult<Array1<FloatValue>> {
    if n == 0 {
        return Err(SeedcastError::NoSeedClasses);
    }
    let density = linspace(-NORMAL_SUPPORT, NORMAL_SUPPORT, n).mapv(standard_normal_pdf);
    let total = density.sum();
    Ok(density / total)
}
