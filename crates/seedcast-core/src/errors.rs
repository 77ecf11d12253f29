use thiserror::Error;

/// Error type for invalid model inputs and configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeedcastError {
    #[error("at least one seed class is required")]
    NoSeedClasses,
    #[error("temperature series is empty")]
    EmptyInput,
    #[error("temperature length {temperature} does not match moisture length {moisture}")]
    LengthMismatch { temperature: usize, moisture: usize },
    #[error("start index {start} is outside the valid range 1..={len}")]
    StartOutOfRange { start: usize, len: usize },
    #[error("{name} must be non-negative, got {value}")]
    NegativeThreshold { name: &'static str, value: f64 },
    #[error("afterripening moisture window is degenerate: psi_l ({psi_l}) == psi_u ({psi_u})")]
    DegenerateMoistureWindow { psi_l: f64, psi_u: f64 },
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type for `Result<T, SeedcastError>`.
pub type SeedcastResult<T> = Result<T, SeedcastError>;

impl From<toml::de::Error> for SeedcastError {
    fn from(value: toml::de::Error) -> Self {
        SeedcastError::Config(value.to_string())
    }
}

impl From<toml::ser::Error> for SeedcastError {
    fn from(value: toml::ser::Error) -> Self {
        SeedcastError::Config(value.to_string())
    }
}

impl From<std::io::Error> for SeedcastError {
    fn from(value: std::io::Error) -> Self {
        SeedcastError::Config(value.to_string())
    }
}

/// Fail with [`SeedcastError::InvalidParameter`] unless `value` is finite.
pub fn ensure_finite(name: &'static str, value: f64) -> SeedcastResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SeedcastError::InvalidParameter {
            name,
            reason: format!("expected a finite value, got {value}"),
        })
    }
}

/// Fail with [`SeedcastError::NegativeThreshold`] if `value` is below zero.
pub fn ensure_non_negative(name: &'static str, value: f64) -> SeedcastResult<()> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(SeedcastError::NegativeThreshold { name, value });
    }
    Ok(())
}
