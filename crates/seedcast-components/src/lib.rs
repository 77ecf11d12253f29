//! Seed germination and dispersal models for `seedcast`
//!
//! # Models
//!
//! - [`germination`]: hydrothermal-time germination of a population of
//!   dormancy classes, with afterripening while seeds are dry
//! - [`dispersal`]: thermal-time dispersal counted from flowering
//!
//! Both models take hourly environmental series as plain slices, addressed
//! with a 1-based start hour, and are independent of each other.
//!
//! # Parameters
//!
//! Each model has a parameters struct in the [`parameters`] module with
//! defaults from the published model configuration. [`config`] loads both
//! from a single TOML document.

pub mod config;
pub mod dispersal;
pub mod germination;
pub mod parameters;
