//! Hourly seed germination and dispersal models.
//!
//! The models live in `seedcast-components` and the shared types in
//! `seedcast-core`; this crate re-exports both and builds the Python
//! extension module.

pub mod python;

pub use seedcast_components::{config, dispersal, germination, parameters};
pub use seedcast_core::{errors, histogram, history, timeseries, SeedcastError, SeedcastResult};
