//! Hydrothermal-time germination model with afterripening.
//!
//! A seed population is split into dormancy classes. Each hour the whole
//! population is either dry, in which case dormancy relaxes through
//! afterripening, or imbibed, in which case every class accumulates
//! hydrothermal time. A class germinates on the day its hydrothermal time
//! first exceeds the threshold.

mod afterripening;
mod hydrothermal;
mod model;
mod population;

pub use afterripening::{ar_htu, ar_saturate, Afterripening};
pub use hydrothermal::HydrothermalTime;
pub use model::{GerminationModel, GerminationOutcome};
pub use population::{Regime, SeedPopulation};
