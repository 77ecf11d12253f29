//! Per-class state of a seed population during a germination run.

use super::afterripening::Afterripening;
use super::hydrothermal::HydrothermalTime;
use crate::parameters::GerminationParameters;
use ndarray::{Array1, Zip};
use seedcast_core::distributions::{linspace, normal_class_weights};
use seedcast_core::errors::SeedcastResult;
use seedcast_core::timeseries::{day_of_hour, FloatValue};

/// Which process acted on the population during an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Dry seeds lost dormancy; hydrothermal time was untouched.
    Afterripening,
    /// Imbibed seeds gained hydrothermal time; dormancy was untouched.
    Imbibed,
}

impl Regime {
    /// Seeds are imbibed when the hour's moisture exceeds `psi_max`.
    pub fn for_moisture(moisture: FloatValue, psi_max: FloatValue) -> Self {
        if moisture > psi_max {
            Regime::Imbibed
        } else {
            Regime::Afterripening
        }
    }
}

/// State of every seed class.
///
/// All arrays have `n_seed_classes` elements and share the same class order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedPopulation {
    /// Dormancy index per class.
    pub psi: Array1<FloatValue>,
    /// Accumulated hydrothermal time per class.
    pub htu: Array1<FloatValue>,
    /// Population weight per class, summing to one.
    pub n_seeds: Array1<FloatValue>,
    /// Day each class germinated on, or 0 if it has not.
    pub germination_day: Array1<usize>,
}

impl SeedPopulation {
    /// Initial population for a run.
    pub fn initialize(parameters: &GerminationParameters) -> SeedcastResult<Self> {
        let n = parameters.n_seed_classes;
        let n_seeds = normal_class_weights(n)?;
        let half_breadth = parameters.psi_breadth / 2.0;
        Ok(Self {
            psi: linspace(
                parameters.psi_mean - half_breadth,
                parameters.psi_mean + half_breadth,
                n,
            ),
            htu: Array1::zeros(n),
            n_seeds,
            germination_day: Array1::zeros(n),
        })
    }

    pub fn n_classes(&self) -> usize {
        self.psi.len()
    }

    /// Advance every class by one hour.
    ///
    /// The regime is shared by all classes: either every `psi` afterripens or
    /// every `htu` accumulates, never both.
    pub fn next_hour(
        &mut self,
        temperature: FloatValue,
        moisture: FloatValue,
        psi_max: FloatValue,
        afterripening: &Afterripening,
        hydrothermal: &HydrothermalTime,
    ) -> Regime {
        let regime = Regime::for_moisture(moisture, psi_max);
        match regime {
            Regime::Afterripening => {
                let loss = afterripening.ar_loss(temperature, moisture);
                self.psi.mapv_inplace(|psi| afterripening.next_psi(psi, loss));
            }
            Regime::Imbibed => {
                Zip::from(&mut self.htu).and(&self.psi).for_each(|htu, &psi| {
                    *htu += hydrothermal.calc_htu(psi, temperature, moisture);
                });
            }
        }
        regime
    }

    /// Latch the germination day of every class that has just passed `threshold`.
    ///
    /// `hour` is the 1-based hour index. Classes that already germinated keep
    /// their day. Returns the number of newly germinated classes.
    pub fn latch_germination(&mut self, hour: usize, threshold: FloatValue) -> usize {
        let day = day_of_hour(hour);
        let mut newly_germinated = 0;
        Zip::from(&mut self.germination_day)
            .and(&self.htu)
            .for_each(|germination_day, &htu| {
                if *germination_day == 0 && htu > threshold {
                    *germination_day = day;
                    newly_germinated += 1;
                }
            });
        newly_germinated
    }

    pub fn all_germinated(&self) -> bool {
        self.germination_day.iter().all(|&day| day != 0)
    }

    /// Population weight of classes that have not germinated.
    pub fn ungerminated_fraction(&self) -> FloatValue {
        self.germination_day
            .iter()
            .zip(self.n_seeds.iter())
            .filter(|(&day, _)| day == 0)
            .map(|(_, &weight)| weight)
            .sum()
    }
}
