//! Configs command: describe the records the view validates.

use serde::Serialize;

use crate::domain::SliderConfigStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub id: u32,
    pub view_config_name: String,
    pub required: bool,
    /// Name of the record gating this one.
    pub required_by: Option<String>,
    pub value: Option<String>,
}

pub fn execute(store: &SliderConfigStore) -> Vec<ConfigSummary> {
    store
        .all()
        .iter()
        .map(|config| ConfigSummary {
            id: config.id().get(),
            view_config_name: config.view_config_name().to_string(),
            required: config.required(),
            required_by: store.dependency_of(config).map(|dep| dep.view_config_name().to_string()),
            value: config.value.clone(),
        })
        .collect()
}
