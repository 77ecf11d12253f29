//! Weighted histograms over integer day numbers.

use crate::timeseries::FloatValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Total weight per distinct day, in ascending day order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayHistogram {
    pub days: Vec<usize>,
    pub weights: Vec<FloatValue>,
}

impl DayHistogram {
    /// Sum `weights` into buckets keyed by `days`.
    ///
    /// Both iterators are consumed in lockstep; entries whose day is rejected
    /// by `include` are skipped.
    pub fn from_pairs<D, W, F>(days: D, weights: W, include: F) -> Self
    where
        D: IntoIterator<Item = usize>,
        W: IntoIterator<Item = FloatValue>,
        F: Fn(usize) -> bool,
    {
        let mut buckets: BTreeMap<usize, FloatValue> = BTreeMap::new();
        for (day, weight) in days.into_iter().zip(weights) {
            if include(day) {
                *buckets.entry(day).or_insert(0.0) += weight;
            }
        }
        let (days, weights) = buckets.into_iter().unzip();
        Self { days, weights }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sum of all bucket weights.
    pub fn total(&self) -> FloatValue {
        self.weights.iter().sum()
    }
}
