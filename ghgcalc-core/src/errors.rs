use thiserror::Error;

/// Error type for invalid inventories and configuration files.
///
/// Scenario calculations never fail: every error here is raised while building
/// an engine or loading configuration.
#[derive(Error, Debug)]
pub enum GhgError {
    #[error("{0}")]
    Error(String),
    #[error("Invalid inventory value for `{field}`: {reason}")]
    InvalidInventory { field: String, reason: String },
    #[error("Baseline {quantity} in {sector} is zero, so a scenario cannot redistribute energy into it")]
    ZeroBaseline { sector: String, quantity: String },
    #[error("{sector} inventory has no {fuel} entry")]
    MissingFuel { sector: String, fuel: String },
    #[error("Could not parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Could not serialise to TOML: {0}")]
    TomlSerialise(#[from] toml::ser::Error),
    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Convenience type for `Result<T, GhgError>`.
pub type GhgResult<T> = Result<T, GhgError>;

impl GhgError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        GhgError::InvalidInventory {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
