//! Settings models loaded from `slider-view.toml`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, SliderConfigDefinition};

/// Top-level settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewSettings {
    /// Ambari endpoint and view-instance identity.
    #[serde(default)]
    pub ambari: AmbariSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Message template overrides, keyed by message id.
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
    /// Record definitions. The built-in catalog is used when empty.
    #[serde(default)]
    pub configs: Vec<SliderConfigDefinition>,
}

impl ViewSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        self.ambari.validate()?;
        Ok(())
    }
}

/// Where the view instance lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AmbariSettings {
    /// Ambari REST API root, e.g. `http://ambari:8080/api/v1/`.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    #[serde(default = "default_view")]
    pub view: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_instance")]
    pub instance: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub username: Option<String>,
}

impl Default for AmbariSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            view: default_view(),
            version: default_version(),
            instance: default_instance(),
            timeout_secs: default_timeout(),
            username: None,
        }
    }
}

impl AmbariSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("ambari.timeout_secs must be greater than 0"));
        }
        for (field, value) in
            [("view", &self.view), ("version", &self.version), ("instance", &self.instance)]
        {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("ambari.{field} must not be empty")));
            }
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "ambari.api_url is not a base URL: {}",
                self.api_url
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("http://localhost:8080/api/v1/").expect("Default API URL must be valid")
}

fn default_view() -> String {
    "SLIDER".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_instance() -> String {
    "SLIDER_1".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Diagnostic output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    /// Filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: default_level(), json: false }
    }
}

fn default_level() -> String {
    "warn".to_string()
}
