//! Ambari views REST client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use url::Url;

use crate::domain::{AmbariSettings, AppError, ViewParams};
use crate::ports::ViewParamsClient;

const X_REQUESTED_BY: &str = "X-Requested-By";
const REQUESTED_BY: &str = "ambari";
const PROPERTIES_FIELDS: &str = "ViewInstanceInfo/properties";

/// HTTP client for one Ambari view instance.
#[derive(Clone)]
pub struct HttpViewParamsClient {
    instance_url: Url,
    username: Option<String>,
    password: Option<String>,
    client: Client,
}

impl std::fmt::Debug for HttpViewParamsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpViewParamsClient")
            .field("instance_url", &self.instance_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpViewParamsClient {
    /// Create a client for the instance described by `settings`.
    ///
    /// A password without a username is rejected; basic auth needs both.
    pub fn new(settings: &AmbariSettings, password: Option<String>) -> Result<Self, AppError> {
        if password.is_some() && settings.username.is_none() {
            return Err(AppError::config_error(
                "AMBARI_PASSWORD is set but no username is configured; set AMBARI_USERNAME or ambari.username",
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            instance_url: instance_url(settings)?,
            username: settings.username.clone(),
            password,
            client,
        })
    }

    /// Create with credentials from `AMBARI_USERNAME` / `AMBARI_PASSWORD`.
    ///
    /// `AMBARI_USERNAME` overrides the configured username.
    pub fn from_env_with_settings(settings: &AmbariSettings) -> Result<Self, AppError> {
        let mut settings = settings.clone();
        if let Ok(username) = std::env::var("AMBARI_USERNAME") {
            settings.username = Some(username);
        }
        let password = std::env::var("AMBARI_PASSWORD").ok();
        Self::new(&settings, password)
    }
}

/// `{api_url}/views/{view}/versions/{version}/instances/{instance}?fields=...`
fn instance_url(settings: &AmbariSettings) -> Result<Url, AppError> {
    let mut url = settings.api_url.clone();
    url.path_segments_mut()
        .map_err(|_| {
            AppError::Configuration(format!("ambari.api_url is not a base URL: {}", settings.api_url))
        })?
        .pop_if_empty()
        .extend([
            "views",
            settings.view.as_str(),
            "versions",
            settings.version.as_str(),
            "instances",
            settings.instance.as_str(),
        ]);
    url.query_pairs_mut().clear().append_pair("fields", PROPERTIES_FIELDS);
    Ok(url)
}

impl ViewParamsClient for HttpViewParamsClient {
    fn fetch_view_params(&self) -> Result<ViewParams, AppError> {
        let mut request = self
            .client
            .get(self.instance_url.clone())
            .header(X_REQUESTED_BY, REQUESTED_BY)
            .header(ACCEPT, "application/json");
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }

        let response =
            request.send().map_err(|e| AppError::ViewParamsRequest(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ViewParamsRequest(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let document: Value = response.json().map_err(|e| AppError::ParseError {
            what: "view instance response".to_string(),
            details: e.to_string(),
        })?;
        Ok(ViewParams::from_response(&document))
    }
}
