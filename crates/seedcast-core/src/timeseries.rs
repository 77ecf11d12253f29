//! Hourly time axis helpers.
//!
//! Environmental inputs are plain slices with one sample per hour. Hours are
//! addressed with a 1-based index so that hour `t` maps onto day
//! `floor(t / 24) + 1`, matching the published models.

use crate::errors::{SeedcastError, SeedcastResult};
use std::ops::RangeInclusive;

pub type FloatValue = f64;

/// Number of hourly samples per day.
pub const HOURS_PER_DAY: usize = 24;

/// Day number (1-based) containing the 1-based hour index `hour`.
pub fn day_of_hour(hour: usize) -> usize {
    hour / HOURS_PER_DAY + 1
}

/// The span of 1-based hour indices a model run iterates over.
///
/// Construction validates that `start` falls inside a non-empty series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyWindow {
    start: usize,
    len: usize,
}

impl HourlyWindow {
    /// Create a window starting at the 1-based `start` over a series of `len` samples.
    pub fn new(len: usize, start: usize) -> SeedcastResult<Self> {
        if len == 0 {
            return Err(SeedcastError::EmptyInput);
        }
        if start == 0 || start > len {
            return Err(SeedcastError::StartOutOfRange { start, len });
        }
        Ok(Self { start, len })
    }

    /// Create a window over a temperature/moisture pair, which must have equal lengths.
    pub fn for_pair(
        temperature: &[FloatValue],
        moisture: &[FloatValue],
        start: usize,
    ) -> SeedcastResult<Self> {
        if temperature.len() != moisture.len() {
            return Err(SeedcastError::LengthMismatch {
                temperature: temperature.len(),
                moisture: moisture.len(),
            });
        }
        Self::new(temperature.len(), start)
    }

    /// First hour (1-based).
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last hour (1-based), inclusive.
    pub fn end(&self) -> usize {
        self.len
    }

    /// Number of hours in the window.
    pub fn n_hours(&self) -> usize {
        self.len - self.start + 1
    }

    /// Iterate over the 1-based hour indices of the window.
    pub fn hours(&self) -> RangeInclusive<usize> {
        self.start..=self.len
    }

    /// Convert a 1-based hour into a slice offset.
    pub fn offset(hour: usize) -> usize {
        hour - 1
    }
}
