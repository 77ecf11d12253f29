//! Core types shared by the seedcast germination and dispersal models.
//!
//! The models themselves live in `seedcast-components`. This crate holds the
//! pieces both of them lean on: the error type, the hourly time axis,
//! seed-class distribution helpers and the per-hour history recorder.

pub mod distributions;
pub mod errors;
pub mod histogram;
pub mod history;
pub mod timeseries;

pub use errors::{SeedcastError, SeedcastResult};
