//! Hydrothermal time accumulated by imbibed seeds.
//!
//! Below the optimum temperature a class gains
//! $(\theta - \psi)(T - T_{bg})$ per hour. Above it the effective base water
//! potential rises to $\psi + k_T (T - T_o)$ and the thermal term saturates at
//! $T_o - T_{bg}$. Both terms are evaluated independently and summed.

use crate::parameters::GerminationParameters;
use seedcast_core::timeseries::FloatValue;

/// Hydrothermal-time sub-model prepared for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydrothermalTime {
    t_bg: FloatValue,
    t_o: FloatValue,
    k_t: FloatValue,
}

impl HydrothermalTime {
    pub fn from_parameters(parameters: &GerminationParameters) -> Self {
        Self {
            t_bg: parameters.t_bg,
            t_o: parameters.t_o,
            k_t: parameters.k_t,
        }
    }

    /// Contribution while `t_bg < temperature <= t_o`.
    pub fn sub_optimal(
        &self,
        psi: FloatValue,
        temperature: FloatValue,
        moisture: FloatValue,
    ) -> FloatValue {
        if psi < moisture && temperature > self.t_bg && temperature <= self.t_o {
            (moisture - psi) * (temperature - self.t_bg)
        } else {
            0.0
        }
    }

    /// Contribution while `temperature > t_o`.
    pub fn supra_optimal(
        &self,
        psi: FloatValue,
        temperature: FloatValue,
        moisture: FloatValue,
    ) -> FloatValue {
        if temperature <= self.t_o {
            return 0.0;
        }
        let m_psi = psi + self.k_t * (temperature - self.t_o);
        if m_psi < moisture {
            (moisture - m_psi) * (self.t_o - self.t_bg)
        } else {
            0.0
        }
    }

    /// Hydrothermal time gained by a class with dormancy index `psi` in one hour.
    pub fn calc_htu(
        &self,
        psi: FloatValue,
        temperature: FloatValue,
        moisture: FloatValue,
    ) -> FloatValue {
        self.sub_optimal(psi, temperature, moisture)
            + self.supra_optimal(psi, temperature, moisture)
    }
}
