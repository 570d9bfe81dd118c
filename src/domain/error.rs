use std::io;

use thiserror::Error;

/// Library-wide error type for slider-view operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Settings file given explicitly but not present.
    #[error("Settings file not found: {0}")]
    SettingsMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Two record definitions share an id.
    #[error("Duplicate slider config id {0}")]
    DuplicateConfigId(u32),

    /// A record's `require_depends_on` points at an id that is not defined.
    #[error("Slider config '{config}' depends on unknown config id {depends_on}")]
    UnknownDependency { config: String, depends_on: u32 },

    /// Message template override for a key that has no meaning.
    #[error("Unknown message key '{0}'")]
    UnknownMessageKey(String),

    /// The `slider.getViewParams` request could not be completed.
    #[error("View params request failed: {0}")]
    ViewParamsRequest(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
