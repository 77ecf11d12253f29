//! Model parameters
//!
//! Each model has a parameter struct with defaults taken from the published
//! model configuration. All structs deserialise with `#[serde(default)]`, so a
//! configuration only needs to name the values it changes.

mod dispersal;
mod germination;

pub use dispersal::DispersalParameters;
pub use germination::GerminationParameters;
