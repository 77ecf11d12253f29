//! Germination model run loop and its outcome.

use super::afterripening::Afterripening;
use super::hydrothermal::HydrothermalTime;
use super::population::SeedPopulation;
use crate::parameters::GerminationParameters;
use log::{debug, trace};
use ndarray::Array1;
use seedcast_core::errors::SeedcastResult;
use seedcast_core::histogram::DayHistogram;
use seedcast_core::history::StateHistory;
use seedcast_core::timeseries::{FloatValue, HourlyWindow};
use serde::{Deserialize, Serialize};

/// Result of a germination run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GerminationOutcome {
    /// Distinct germination days in ascending order.
    pub germination_days: Vec<usize>,
    /// Population weight that germinated on the matching entry of `germination_days`.
    pub fraction_of_seeds: Vec<FloatValue>,
    /// Population weight that had not germinated when the data ran out.
    pub ungerminated_fraction: FloatValue,
    /// Germination day of every class, 0 where the class never germinated.
    pub class_germination_days: Array1<usize>,
    /// Number of hours processed before the run stopped.
    pub hours_simulated: usize,
    /// Per-hour hydrothermal time, if `record_htu` was set.
    pub htu_history: Option<StateHistory>,
    /// Per-hour dormancy index, if `record_psi` was set.
    pub psi_history: Option<StateHistory>,
}

impl GerminationOutcome {
    /// Population weight that germinated within the data.
    pub fn germinated_fraction(&self) -> FloatValue {
        self.fraction_of_seeds.iter().sum()
    }

    pub fn all_germinated(&self) -> bool {
        self.class_germination_days.iter().all(|&day| day != 0)
    }
}

/// Germination model driven by hourly temperature and moisture.
///
/// Each hour $t$ either afterripens the dormancy index of every class
/// (when $\theta_t \le \psi_{max}$) or adds hydrothermal time
///
/// $$HTU_c \mathrel{+}= (\theta_t - \psi_c)(T_t - T_{bg})$$
///
/// below the optimum temperature, with the supra-optimal correction above it.
/// A class germinates on day $\lfloor t / 24 \rfloor + 1$ of the first hour
/// its accumulated time exceeds `threshold`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GerminationModel {
    parameters: GerminationParameters,
}

impl GerminationModel {
    /// Create a germination model with default parameters.
    pub fn new() -> Self {
        Self::from_parameters(GerminationParameters::default())
    }

    pub fn from_parameters(parameters: GerminationParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &GerminationParameters {
        &self.parameters
    }

    /// Run the model from the 1-based hour `start` to the end of the data.
    ///
    /// # Arguments
    ///
    /// * `temperature` - Hourly temperature (°C)
    /// * `moisture` - Hourly soil water potential, same length as `temperature`
    /// * `start` - 1-based hour at which the seeds are shed
    ///
    /// # Errors
    ///
    /// Fails without running if the parameters are invalid, the series are
    /// empty or of different lengths, or `start` is outside the series.
    pub fn run(
        &self,
        temperature: &[FloatValue],
        moisture: &[FloatValue],
        start: usize,
    ) -> SeedcastResult<GerminationOutcome> {
        let params = &self.parameters;
        params.validate()?;
        let window = HourlyWindow::for_pair(temperature, moisture, start)?;

        let afterripening = Afterripening::from_parameters(params);
        let hydrothermal = HydrothermalTime::from_parameters(params);
        let mut population = SeedPopulation::initialize(params)?;

        let n_classes = params.n_seed_classes;
        let mut htu_history = params
            .record_htu
            .then(|| StateHistory::with_capacity(n_classes, window.n_hours()));
        let mut psi_history = params
            .record_psi
            .then(|| StateHistory::with_capacity(n_classes, window.n_hours()));

        debug!(
            "germination run: {} classes, hours {}..={}",
            n_classes,
            window.start(),
            window.end()
        );

        let mut hours_simulated = 0;
        for hour in window.hours() {
            let offset = HourlyWindow::offset(hour);
            population.next_hour(
                temperature[offset],
                moisture[offset],
                params.psi_max,
                &afterripening,
                &hydrothermal,
            );
            hours_simulated += 1;

            let newly_germinated = population.latch_germination(hour, params.threshold);
            if newly_germinated > 0 {
                trace!("hour {}: {} classes germinated", hour, newly_germinated);
            }

            if let Some(history) = htu_history.as_mut() {
                history.push(population.htu.view());
            }
            if let Some(history) = psi_history.as_mut() {
                history.push(population.psi.view());
            }

            if population.all_germinated() {
                debug!("all classes germinated by hour {}", hour);
                break;
            }
        }

        let histogram = DayHistogram::from_pairs(
            population.germination_day.iter().copied(),
            population.n_seeds.iter().copied(),
            |day| day != 0,
        );
        let ungerminated_fraction = population.ungerminated_fraction();

        debug!(
            "germination run finished after {} hours, {:.4} of seeds germinated",
            hours_simulated,
            histogram.total()
        );

        Ok(GerminationOutcome {
            germination_days: histogram.days,
            fraction_of_seeds: histogram.weights,
            ungerminated_fraction,
            class_germination_days: population.germination_day,
            hours_simulated,
            htu_history,
            psi_history,
        })
    }
}
