//! TOML configuration for a pair of germination and dispersal models.
//!
//! ```toml
//! [germination]
//! threshold = 800.0
//! n_seed_classes = 50
//!
//! [dispersal]
//! t_b = 5.0
//! ```
//!
//! Omitted tables and keys fall back to the parameter defaults.

use crate::dispersal::DispersalModel;
use crate::germination::GerminationModel;
use crate::parameters::{DispersalParameters, GerminationParameters};
use seedcast_core::errors::SeedcastResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub germination: GerminationParameters,
    pub dispersal: DispersalParameters,
}

impl SimulationConfig {
    /// Parse and validate a configuration.
    pub fn from_toml_str(source: &str) -> SeedcastResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> SeedcastResult<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn to_toml_string(&self) -> SeedcastResult<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> SeedcastResult<()> {
        self.germination.validate()?;
        self.dispersal.validate()
    }

    pub fn germination_model(&self) -> GerminationModel {
        GerminationModel::from_parameters(self.germination.clone())
    }

    pub fn dispersal_model(&self) -> DispersalModel {
        DispersalModel::from_parameters(self.dispersal.clone())
    }
}
