//! Settings loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppError, Messages, SliderConfigStore, ViewSettings};

/// Settings file looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "slider-view.toml";

/// Load settings from `path`, or from [`DEFAULT_SETTINGS_FILE`] when `None`.
///
/// A missing default file yields defaults; a missing explicit file is an error.
pub fn load_settings(path: Option<&Path>) -> Result<ViewSettings, AppError> {
    let settings = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|err| {
                if err.kind() == ErrorKind::NotFound {
                    AppError::SettingsMissing(path.display().to_string())
                } else {
                    AppError::Io(err)
                }
            })?;
            parse_settings_content(&content)?
        }
        None => match fs::read_to_string(DEFAULT_SETTINGS_FILE) {
            Ok(content) => parse_settings_content(&content)?,
            Err(err) if err.kind() == ErrorKind::NotFound => ViewSettings::default(),
            Err(err) => return Err(err.into()),
        },
    };

    settings.validate()?;
    Ok(settings)
}

pub fn parse_settings_content(content: &str) -> Result<ViewSettings, AppError> {
    Ok(toml::from_str(content)?)
}

/// Records described by the settings, or the built-in catalog.
pub fn build_store(settings: &ViewSettings) -> Result<SliderConfigStore, AppError> {
    if settings.configs.is_empty() {
        SliderConfigStore::builtin()
    } else {
        SliderConfigStore::from_definitions(settings.configs.clone())
    }
}

pub fn build_messages(settings: &ViewSettings) -> Result<Messages, AppError> {
    Messages::with_overrides(&settings.messages)
}
