//! Germination model parameters
//!
//! Parameters for the hydrothermal-time germination model with afterripening.

use seedcast_core::errors::{ensure_finite, ensure_non_negative, SeedcastError, SeedcastResult};
use seedcast_core::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the germination model.
///
/// The seed population is split into `n_seed_classes` classes whose initial
/// dormancy index is spread evenly over
/// $[\psi_{mean} - \psi_{breadth}/2, \psi_{mean} + \psi_{breadth}/2]$.
///
/// While seeds are dry ($\theta \le \psi_{max}$) dormancy is lost through
/// afterripening. While they are imbibed ($\theta > \psi_{max}$) each class
/// accumulates hydrothermal time until it passes `threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GerminationParameters {
    /// Hydrothermal time a class must exceed to germinate.
    /// unit: MPa °C h
    /// default: 1000.0
    pub threshold: FloatValue,

    /// Base temperature for germination.
    /// unit: °C
    /// default: 3.0
    pub t_bg: FloatValue,

    /// Optimum temperature for germination.
    /// unit: °C
    /// default: 22.0
    pub t_o: FloatValue,

    /// Rise in the base water potential per degree above `t_o`.
    /// unit: MPa / °C
    /// default: 0.05
    pub k_t: FloatValue,

    /// Mean initial dormancy index of the population.
    /// unit: MPa
    /// default: -0.5
    pub psi_mean: FloatValue,

    /// Lower bound the dormancy index is clamped to during afterripening.
    /// unit: MPa
    /// default: -2.0
    pub psi_min: FloatValue,

    /// Width of the initial dormancy spread.
    /// unit: MPa
    /// default: 1.0
    pub psi_breadth: FloatValue,

    /// Number of seed classes.
    /// default: 100
    pub n_seed_classes: usize,

    /// Base temperature for afterripening.
    /// unit: °C
    /// default: 3.0
    pub t_bar: FloatValue,

    /// Moisture above which seeds are imbibed.
    /// unit: MPa
    /// default: -5.0
    pub psi_max: FloatValue,

    /// Lower moisture bound of the afterripening window.
    /// unit: MPa
    /// default: -350.0
    pub psi_l: FloatValue,

    /// Upper moisture bound of the afterripening window.
    /// unit: MPa
    /// default: -50.0
    pub psi_u: FloatValue,

    /// Days at reference conditions needed to lose `psi_scale` of dormancy.
    /// unit: days
    /// default: 60.0
    pub d_sat: FloatValue,

    /// Dormancy lost after `d_sat` days at reference conditions.
    /// unit: MPa
    /// default: 1.0
    pub psi_scale: FloatValue,

    /// Record the per-class hydrothermal time after every hour.
    /// default: false
    pub record_htu: bool,

    /// Record the per-class dormancy index after every hour.
    /// default: false
    pub record_psi: bool,
}

impl Default for GerminationParameters {
    fn default() -> Self {
        Self {
            threshold: 1000.0,
            t_bg: 3.0,
            t_o: 22.0,
            k_t: 0.05,
            psi_mean: -0.5,
            psi_min: -2.0,
            psi_breadth: 1.0,
            n_seed_classes: 100,
            t_bar: 3.0,
            psi_max: -5.0,
            psi_l: -350.0,
            psi_u: -50.0,
            d_sat: 60.0,
            psi_scale: 1.0,
            record_htu: false,
            record_psi: false,
        }
    }
}

impl GerminationParameters {
    /// Check the parameters can drive a run.
    pub fn validate(&self) -> SeedcastResult<()> {
        if self.n_seed_classes < 1 {
            return Err(SeedcastError::NoSeedClasses);
        }
        ensure_non_negative("threshold", self.threshold)?;
        for (name, value) in [
            ("t_bg", self.t_bg),
            ("t_o", self.t_o),
            ("k_t", self.k_t),
            ("psi_mean", self.psi_mean),
            ("psi_min", self.psi_min),
            ("psi_breadth", self.psi_breadth),
            ("t_bar", self.t_bar),
            ("psi_max", self.psi_max),
            ("psi_l", self.psi_l),
            ("psi_u", self.psi_u),
            ("psi_scale", self.psi_scale),
        ] {
            ensure_finite(name, value)?;
        }
        if self.psi_l == self.psi_u {
            return Err(SeedcastError::DegenerateMoistureWindow {
                psi_l: self.psi_l,
                psi_u: self.psi_u,
            });
        }
        if self.n_seed_classes > 1 && self.psi_breadth <= 0.0 {
            return Err(SeedcastError::InvalidParameter {
                name: "psi_breadth",
                reason: format!(
                    "must be positive with more than one seed class, got {}",
                    self.psi_breadth
                ),
            });
        }
        ensure_finite("d_sat", self.d_sat)?;
        if self.d_sat <= 0.0 {
            return Err(SeedcastError::InvalidParameter {
                name: "d_sat",
                reason: format!("must be positive, got {}", self.d_sat),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GerminationParameters::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_classes() {
        let params = GerminationParameters {
            n_seed_classes: 0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(SeedcastError::NoSeedClasses));
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let params = GerminationParameters {
            threshold: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(SeedcastError::NegativeThreshold {
                name: "threshold",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_degenerate_window() {
        let params = GerminationParameters {
            psi_l: -100.0,
            psi_u: -100.0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(SeedcastError::DegenerateMoistureWindow {
                psi_l: -100.0,
                psi_u: -100.0
            })
        );
    }

    #[test]
    fn test_rejects_non_positive_breadth() {
        for psi_breadth in [0.0, -0.5] {
            let params = GerminationParameters {
                psi_breadth,
                n_seed_classes: 10,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(SeedcastError::InvalidParameter {
                    name: "psi_breadth",
                    ..
                })
            ));
        }

        // A single class has no spread to order
        let params = GerminationParameters {
            psi_breadth: 0.0,
            n_seed_classes: 1,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_d_sat() {
        let params = GerminationParameters {
            d_sat: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(SeedcastError::InvalidParameter { name: "d_sat", .. })
        ));
    }

    #[test]
    fn test_partial_deserialisation_uses_defaults() {
        let params: GerminationParameters =
            serde_json::from_str(r#"{"threshold": 500.0, "n_seed_classes": 3}"#).unwrap();
        assert_eq!(params.threshold, 500.0);
        assert_eq!(params.n_seed_classes, 3);
        assert_eq!(params.t_o, 22.0);
        assert!(!params.record_htu);
    }
}
