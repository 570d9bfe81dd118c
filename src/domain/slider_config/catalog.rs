//! Record definitions and the built-in Slider catalog.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

const BUILTIN_CATALOG: &str = include_str!("../../assets/slider_configs.toml");

/// Declarative form of a slider config record, as written in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliderConfigDefinition {
    pub id: u32,
    pub view_config_name: String,
    #[serde(default)]
    pub required: bool,
    /// Id of the record whose `"true"` value makes this one required.
    #[serde(default)]
    pub require_depends_on: Option<u32>,
    /// Initial value, used when the view-instance fetch fails.
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    configs: Vec<SliderConfigDefinition>,
}

/// Parse a catalog document containing a `[[configs]]` array.
pub fn parse_catalog(content: &str) -> Result<Vec<SliderConfigDefinition>, AppError> {
    let catalog: CatalogFile = toml::from_str(content)?;
    Ok(catalog.configs)
}

/// Default records of the Slider view.
pub fn builtin_definitions() -> Result<Vec<SliderConfigDefinition>, AppError> {
    parse_catalog(BUILTIN_CATALOG).map_err(|err| AppError::ParseError {
        what: "built-in slider catalog".to_string(),
        details: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SliderConfigStore;

    #[test]
    fn builtin_catalog_resolves() {
        let store = SliderConfigStore::from_definitions(builtin_definitions().unwrap()).unwrap();
        assert_eq!(store.len(), 12);

        let required: Vec<_> =
            store.all().iter().filter(|c| c.required()).map(|c| c.view_config_name()).collect();
        assert_eq!(
            required,
            [
                "hdfs.address",
                "yarn.resourcemanager.address",
                "yarn.resourcemanager.scheduler.address",
                "zookeeper.quorum",
            ]
        );
    }

    #[test]
    fn kerberos_settings_depend_on_security_flag() {
        let store = SliderConfigStore::builtin().unwrap();
        let gated: Vec<_> = store
            .all()
            .iter()
            .filter_map(|c| store.dependency_of(c).map(|dep| (c.view_config_name(), dep)))
            .collect();

        assert_eq!(gated.len(), 4);
        for (_, dep) in gated {
            assert_eq!(dep.view_config_name(), "slider.security.enabled");
            assert_eq!(dep.value.as_deref(), Some("false"));
        }
    }

    #[test]
    fn parse_catalog_rejects_unknown_fields() {
        let content = r#"
[[configs]]
id = 1
view_config_name = "hdfs.address"
mandatory = true
"#;
        assert!(matches!(parse_catalog(content), Err(AppError::TomlParseError(_))));
    }
}
