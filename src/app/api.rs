//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together settings
//! loading, context creation and command execution.

use std::path::Path;

use crate::app::{AppContext, commands};
use crate::domain::configuration::{build_messages, build_store, load_settings};
use crate::domain::{SharedViewState, ViewSettings};
use crate::ports::ViewParamsClient;
use crate::services::HttpViewParamsClient;

pub use crate::app::commands::check::{CheckOptions, CheckOutcome};
pub use crate::app::commands::configs::ConfigSummary;
pub use crate::app::controller::FetchStatus;
pub use crate::domain::AppError;

/// Load settings, fetch the view-instance parameters and validate.
pub fn check(options: CheckOptions) -> Result<CheckOutcome, AppError> {
    let settings = load_settings(options.settings_path.as_deref())?;
    check_with_settings(&settings, options.offline, &SharedViewState::new())
}

/// Run a check against already-loaded settings, publishing into `view_state`.
pub fn check_with_settings(
    settings: &ViewSettings,
    offline: bool,
    view_state: &SharedViewState,
) -> Result<CheckOutcome, AppError> {
    let client = HttpViewParamsClient::from_env_with_settings(&settings.ambari)?;
    check_with_client(settings, client, offline, view_state)
}

/// Run a check with a caller-supplied client.
pub fn check_with_client<C: ViewParamsClient>(
    settings: &ViewSettings,
    client: C,
    offline: bool,
    view_state: &SharedViewState,
) -> Result<CheckOutcome, AppError> {
    let mut store = build_store(settings)?;
    let ctx = AppContext::new(client, build_messages(settings)?, view_state.clone());
    Ok(commands::check::execute(&ctx, &mut store, offline))
}

/// Describe the records that would be validated.
pub fn list_configs(settings_path: Option<&Path>) -> Result<Vec<ConfigSummary>, AppError> {
    let settings = load_settings(settings_path)?;
    let store = build_store(&settings)?;
    Ok(commands::configs::execute(&store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeViewParamsClient;

    #[test]
    fn check_with_client_publishes_into_shared_state() {
        let settings = crate::domain::configuration::parse_settings_content(
            r#"
[[configs]]
id = 1
view_config_name = "foo"
required = true
"#,
        )
        .unwrap();
        let view_state = SharedViewState::new();

        let outcome = check_with_client(
            &settings,
            FakeViewParamsClient::with_params([("foo", "bar")]),
            false,
            &view_state,
        )
        .unwrap();

        assert!(outcome.state.view_enabled);
        assert_eq!(view_state.snapshot(), outcome.state);
    }

    #[test]
    fn check_with_client_surfaces_catalog_errors() {
        let settings = crate::domain::configuration::parse_settings_content(
            r#"
[[configs]]
id = 1
view_config_name = "foo"
require_depends_on = 2
"#,
        )
        .unwrap();

        let err = check_with_client(
            &settings,
            FakeViewParamsClient::with_params(Vec::<(&str, &str)>::new()),
            false,
            &SharedViewState::new(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::UnknownDependency { depends_on: 2, .. }));
    }
}
