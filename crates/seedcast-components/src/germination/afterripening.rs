//! Afterripening: dormancy loss while seeds are dry.
//!
//! Dry seeds accumulate afterripening heat units whenever the temperature is
//! above `t_bar`. Moisture scales the rate linearly across the window
//! `[psi_l, psi_u]`; above `psi_u` the full thermal excess counts. The
//! dormancy index of every class drops by the accumulated units, scaled so
//! that `d_sat` days at reference conditions remove `psi_scale`, and is
//! clamped at `psi_min`.

use crate::parameters::GerminationParameters;
use seedcast_core::timeseries::{FloatValue, HOURS_PER_DAY};

/// Reference temperature used to normalise the afterripening rate (°C).
pub const REFERENCE_TEMPERATURE: FloatValue = 20.0;
/// Reference moisture used to normalise the afterripening rate.
pub const REFERENCE_MOISTURE: FloatValue = -200.0;
/// Reference afterripening base temperature (°C).
pub const REFERENCE_T_BAR: FloatValue = 3.0;
/// Reference lower moisture bound.
pub const REFERENCE_PSI_L: FloatValue = -350.0;
/// Reference upper moisture bound.
pub const REFERENCE_PSI_U: FloatValue = -50.0;

/// Afterripening heat units accumulated in one hour.
///
/// $$
/// AR = \begin{cases}
///   \frac{\psi_l - \theta}{\psi_l - \psi_u}(T - T_{bar}) & \psi_l \le \theta \le \psi_u \\
///   T - T_{bar} & \theta > \psi_u \\
///   0 & \text{otherwise}
/// \end{cases}
/// $$
///
/// with no accumulation unless $T > T_{bar}$.
pub fn ar_htu(
    temperature: FloatValue,
    moisture: FloatValue,
    t_bar: FloatValue,
    psi_l: FloatValue,
    psi_u: FloatValue,
) -> FloatValue {
    if temperature <= t_bar {
        return 0.0;
    }
    if moisture > psi_u {
        temperature - t_bar
    } else if moisture >= psi_l {
        ((psi_l - moisture) / (psi_l - psi_u)) * (temperature - t_bar)
    } else {
        0.0
    }
}

/// Afterripening heat units accumulated over `d_sat` days at reference conditions.
pub fn ar_saturate(d_sat: FloatValue) -> FloatValue {
    ar_htu(
        REFERENCE_TEMPERATURE,
        REFERENCE_MOISTURE,
        REFERENCE_T_BAR,
        REFERENCE_PSI_L,
        REFERENCE_PSI_U,
    ) * HOURS_PER_DAY as FloatValue
        * d_sat
}

/// Afterripening sub-model prepared for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Afterripening {
    t_bar: FloatValue,
    psi_l: FloatValue,
    psi_u: FloatValue,
    psi_min: FloatValue,
    /// Dormancy lost per afterripening heat unit.
    loss_per_unit: FloatValue,
}

impl Afterripening {
    pub fn from_parameters(parameters: &GerminationParameters) -> Self {
        Self {
            t_bar: parameters.t_bar,
            psi_l: parameters.psi_l,
            psi_u: parameters.psi_u,
            psi_min: parameters.psi_min,
            loss_per_unit: parameters.psi_scale / ar_saturate(parameters.d_sat),
        }
    }

    /// Dormancy lost by every class this hour, before clamping.
    pub fn ar_loss(&self, temperature: FloatValue, moisture: FloatValue) -> FloatValue {
        ar_htu(temperature, moisture, self.t_bar, self.psi_l, self.psi_u) * self.loss_per_unit
    }

    /// New dormancy index of one class after an hour of afterripening.
    pub fn next_psi(&self, psi: FloatValue, loss: FloatValue) -> FloatValue {
        (psi - loss).max(self.psi_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    const T_BAR: FloatValue = 3.0;
    const PSI_L: FloatValue = -350.0;
    const PSI_U: FloatValue = -50.0;

    #[test]
    fn test_no_units_at_or_below_base_temperature() {
        assert_eq!(ar_htu(3.0, -100.0, T_BAR, PSI_L, PSI_U), 0.0);
        assert_eq!(ar_htu(-5.0, 0.0, T_BAR, PSI_L, PSI_U), 0.0);
    }

    #[test]
    fn test_saturated_above_window() {
        assert!(is_close!(ar_htu(13.0, -10.0, T_BAR, PSI_L, PSI_U), 10.0));
    }

    #[test]
    fn test_interpolates_across_window() {
        // Halfway through the window gives half the thermal excess
        assert!(is_close!(ar_htu(13.0, -200.0, T_BAR, PSI_L, PSI_U), 5.0));
        // At the upper bound the full excess counts
        assert!(is_close!(ar_htu(13.0, PSI_U, T_BAR, PSI_L, PSI_U), 10.0));
        // At the lower bound nothing accumulates
        assert_eq!(ar_htu(13.0, PSI_L, T_BAR, PSI_L, PSI_U), 0.0);
    }

    #[test]
    fn test_nothing_below_window() {
        assert_eq!(ar_htu(25.0, -400.0, T_BAR, PSI_L, PSI_U), 0.0);
    }

    #[test]
    fn test_ar_saturate_reference_value() {
        // (150 / 300) * 17 °C = 8.5 units per hour
        assert!(is_close!(ar_saturate(1.0), 8.5 * 24.0));
        assert!(is_close!(ar_saturate(60.0), 8.5 * 24.0 * 60.0));
    }

    #[test]
    fn test_reference_days_remove_psi_scale() {
        let params = GerminationParameters {
            d_sat: 2.0,
            psi_scale: 0.4,
            psi_min: -100.0,
            ..Default::default()
        };
        let ar = Afterripening::from_parameters(&params);

        let mut psi = 0.0;
        for _ in 0..(2 * HOURS_PER_DAY) {
            let loss = ar.ar_loss(REFERENCE_TEMPERATURE, REFERENCE_MOISTURE);
            psi = ar.next_psi(psi, loss);
        }
        assert!(is_close!(psi, -0.4));
    }

    #[test]
    fn test_clamps_at_psi_min() {
        let params = GerminationParameters::default();
        let ar = Afterripening::from_parameters(&params);
        assert_eq!(ar.next_psi(params.psi_min + 0.001, 1.0), params.psi_min);
        assert_eq!(ar.next_psi(params.psi_min - 1.0, 0.0), params.psi_min);
    }
}
