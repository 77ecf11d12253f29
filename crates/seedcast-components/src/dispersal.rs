//! Thermal-time seed dispersal model.
//!
//! Starting from flowering, degree-hours above a base temperature are summed
//! until they reach the dispersal threshold. The hour at which that happens
//! is the dispersal time.

use crate::parameters::DispersalParameters;
use log::debug;
use seedcast_core::errors::SeedcastResult;
use seedcast_core::timeseries::{FloatValue, HourlyWindow};
use serde::{Deserialize, Serialize};

/// Result of a dispersal run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispersalOutcome {
    /// 1-based hour at which the threshold was first reached.
    pub dispersal_time: Option<usize>,
    /// Thermal units accumulated when the run stopped.
    pub total_thermal_units: FloatValue,
    /// Running total after each processed hour, if `record_progress` was set.
    pub progress: Option<Vec<FloatValue>>,
}

impl DispersalOutcome {
    /// Dispersal time with `-1` standing in for "never reached".
    pub fn dispersal_time_or_sentinel(&self) -> i64 {
        self.dispersal_time.map_or(-1, |hour| hour as i64)
    }
}

/// Thermal-time dispersal model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispersalModel {
    parameters: DispersalParameters,
}

impl DispersalModel {
    /// Create a dispersal model with default parameters.
    pub fn new() -> Self {
        Self::from_parameters(DispersalParameters::default())
    }

    pub fn from_parameters(parameters: DispersalParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &DispersalParameters {
        &self.parameters
    }

    /// Thermal units gained in an hour at `temperature`.
    pub fn thermal_units(&self, temperature: FloatValue) -> FloatValue {
        if temperature > self.parameters.t_b {
            temperature - self.parameters.t_b
        } else {
            0.0
        }
    }

    /// Accumulate thermal units from the 1-based hour `start`.
    ///
    /// Returns as soon as the running total reaches the threshold.
    pub fn run(
        &self,
        temperature: &[FloatValue],
        start: usize,
    ) -> SeedcastResult<DispersalOutcome> {
        self.parameters.validate()?;
        let window = HourlyWindow::new(temperature.len(), start)?;

        let mut progress = self
            .parameters
            .record_progress
            .then(|| Vec::with_capacity(window.n_hours()));
        let mut total = 0.0;
        let mut dispersal_time = None;

        for hour in window.hours() {
            total += self.thermal_units(temperature[HourlyWindow::offset(hour)]);
            if let Some(progress) = progress.as_mut() {
                progress.push(total);
            }
            if total >= self.parameters.threshold {
                dispersal_time = Some(hour);
                break;
            }
        }

        match dispersal_time {
            Some(hour) => debug!("dispersal at hour {} ({:.2} thermal units)", hour, total),
            None => debug!(
                "dispersal threshold {} not reached by hour {} ({:.2} thermal units)",
                self.parameters.threshold,
                window.end(),
                total
            ),
        }

        Ok(DispersalOutcome {
            dispersal_time,
            total_thermal_units: total,
            progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedcast_core::errors::SeedcastError;

    fn default_model() -> DispersalModel {
        DispersalModel::new()
    }

    #[test]
    fn test_constant_temperature() {
        // 7 units per hour, 70 reached on the 10th hour
        let model = default_model();
        let outcome = model.run(&[10.0; 30], 5).unwrap();
        assert_eq!(outcome.dispersal_time, Some(14));
        assert_eq!(outcome.dispersal_time_or_sentinel(), 14);
        assert_eq!(outcome.total_thermal_units, 70.0);
    }

    #[test]
    fn test_never_reached() {
        let model = default_model();
        let outcome = model.run(&[10.0; 9], 1).unwrap();
        assert_eq!(outcome.dispersal_time, None);
        assert_eq!(outcome.dispersal_time_or_sentinel(), -1);
        assert_eq!(outcome.total_thermal_units, 63.0);
    }

    #[test]
    fn test_cold_hours_add_nothing() {
        let model = default_model();
        assert_eq!(model.thermal_units(3.0), 0.0);
        assert_eq!(model.thermal_units(-10.0), 0.0);
        assert_eq!(model.thermal_units(4.5), 1.5);
    }

    #[test]
    fn test_progress_records_unchanged_totals() {
        let model = DispersalModel::from_parameters(DispersalParameters {
            threshold: 10.0,
            record_progress: true,
            ..Default::default()
        });
        let outcome = model.run(&[8.0, 0.0, 2.0, 8.0, 8.0], 1).unwrap();
        assert_eq!(outcome.dispersal_time, Some(4));
        assert_eq!(outcome.progress, Some(vec![5.0, 5.0, 5.0, 10.0]));
    }

    #[test]
    fn test_zero_threshold_disperses_immediately() {
        let model = DispersalModel::from_parameters(DispersalParameters {
            threshold: 0.0,
            ..Default::default()
        });
        let outcome = model.run(&[0.0, 0.0], 2).unwrap();
        assert_eq!(outcome.dispersal_time, Some(2));
    }

    #[test]
    fn test_rejects_bad_start() {
        let model = default_model();
        assert_eq!(
            model.run(&[10.0; 3], 4),
            Err(SeedcastError::StartOutOfRange { start: 4, len: 3 })
        );
        assert_eq!(model.run(&[], 1), Err(SeedcastError::EmptyInput));
    }
}
