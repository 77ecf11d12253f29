//! Dispersal model parameters

use seedcast_core::errors::{ensure_finite, ensure_non_negative, SeedcastResult};
use seedcast_core::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for thermal-time seed dispersal.
///
/// Dispersal happens once the degree-hours above `t_b`, counted from
/// flowering, reach `threshold`:
///
/// $$\sum_{i=start}^{n} \max(T_i - T_b, 0) \ge threshold$$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispersalParameters {
    /// Thermal units required for dispersal.
    /// unit: °C h
    /// default: 70.0
    pub threshold: FloatValue,

    /// Base temperature below which no thermal units accumulate.
    /// unit: °C
    /// default: 3.0
    pub t_b: FloatValue,

    /// Record the running total after every hour.
    /// default: false
    pub record_progress: bool,
}

impl Default for DispersalParameters {
    fn default() -> Self {
        Self {
            threshold: 70.0,
            t_b: 3.0,
            record_progress: false,
        }
    }
}

impl DispersalParameters {
    /// Check the parameters can drive a run.
    pub fn validate(&self) -> SeedcastResult<()> {
        ensure_non_negative("threshold", self.threshold)?;
        ensure_finite("t_b", self.t_b)
    }
}
