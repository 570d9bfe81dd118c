//! Slider configuration records and the in-memory store that owns them.

pub mod catalog;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub use catalog::{SliderConfigDefinition, builtin_definitions};

/// Stable identifier of a slider config record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigId(u32);

impl ConfigId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One configurable deployment parameter of the Slider view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderConfig {
    id: ConfigId,
    view_config_name: String,
    required: bool,
    require_depends_on: Option<ConfigId>,
    /// Current value. `None` when the view instance did not provide one.
    pub value: Option<String>,
}

impl SliderConfig {
    pub fn id(&self) -> ConfigId {
        self.id
    }

    /// Key used to look up the value in the view-instance properties.
    pub fn view_config_name(&self) -> &str {
        &self.view_config_name
    }

    pub fn required(&self) -> bool {
        self.required
    }

    /// Record whose value gates whether this one is required.
    pub fn require_depends_on(&self) -> Option<ConfigId> {
        self.require_depends_on
    }

    /// True when the value is absent or zero-length.
    pub fn is_empty(&self) -> bool {
        self.value.as_deref().is_none_or(str::is_empty)
    }
}

/// All slider config records known to the view, in definition order.
///
/// Dependency references are resolved once in [`SliderConfigStore::from_definitions`];
/// afterwards only `value` is mutable.
#[derive(Debug, Clone, Default)]
pub struct SliderConfigStore {
    records: Vec<SliderConfig>,
    index: HashMap<ConfigId, usize>,
}

impl SliderConfigStore {
    /// Build the store, rejecting duplicate ids and references to undefined ids.
    pub fn from_definitions(definitions: Vec<SliderConfigDefinition>) -> Result<Self, AppError> {
        let mut index = HashMap::with_capacity(definitions.len());
        for (position, definition) in definitions.iter().enumerate() {
            if index.insert(ConfigId(definition.id), position).is_some() {
                return Err(AppError::DuplicateConfigId(definition.id));
            }
        }

        let mut records = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let require_depends_on = match definition.require_depends_on {
                Some(dep) if index.contains_key(&ConfigId(dep)) => Some(ConfigId(dep)),
                Some(dep) => {
                    return Err(AppError::UnknownDependency {
                        config: definition.view_config_name,
                        depends_on: dep,
                    });
                }
                None => None,
            };

            records.push(SliderConfig {
                id: ConfigId(definition.id),
                view_config_name: definition.view_config_name,
                required: definition.required,
                require_depends_on,
                value: definition.value,
            });
        }

        Ok(Self { records, index })
    }

    /// Store populated from the built-in Slider catalog.
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_definitions(builtin_definitions()?)
    }

    pub fn all(&self) -> &[SliderConfig] {
        &self.records
    }

    pub fn all_mut(&mut self) -> impl Iterator<Item = &mut SliderConfig> {
        self.records.iter_mut()
    }

    pub fn get(&self, id: ConfigId) -> Option<&SliderConfig> {
        self.index.get(&id).map(|&position| &self.records[position])
    }

    /// The record gating `config`, if it has one.
    pub fn dependency_of(&self, config: &SliderConfig) -> Option<&SliderConfig> {
        config.require_depends_on.and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(id: u32, name: &str, depends_on: Option<u32>) -> SliderConfigDefinition {
        SliderConfigDefinition {
            id,
            view_config_name: name.to_string(),
            required: false,
            require_depends_on: depends_on,
            value: None,
        }
    }

    #[test]
    fn resolves_dependency_references() {
        let store = SliderConfigStore::from_definitions(vec![
            definition(1, "slider.security.enabled", None),
            definition(2, "view.kerberos.principal", Some(1)),
        ])
        .unwrap();

        let principal = store.get(ConfigId::new(2)).unwrap();
        let gate = store.dependency_of(principal).unwrap();
        assert_eq!(gate.view_config_name(), "slider.security.enabled");
    }

    #[test]
    fn forward_references_are_allowed() {
        let store = SliderConfigStore::from_definitions(vec![
            definition(2, "view.kerberos.principal", Some(1)),
            definition(1, "slider.security.enabled", None),
        ])
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].require_depends_on(), Some(ConfigId::new(1)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = SliderConfigStore::from_definitions(vec![
            definition(1, "hdfs.address", None),
            definition(1, "zookeeper.quorum", None),
        ])
        .unwrap_err();

        assert!(matches!(err, AppError::DuplicateConfigId(1)));
    }

    #[test]
    fn rejects_unknown_dependency() {
        let err =
            SliderConfigStore::from_definitions(vec![definition(2, "view.kerberos.principal", Some(9))])
                .unwrap_err();

        assert!(matches!(err, AppError::UnknownDependency { depends_on: 9, .. }));
    }

    #[test]
    fn duplicate_names_with_distinct_ids_are_allowed() {
        let store = SliderConfigStore::from_definitions(vec![
            definition(1, "hdfs.address", None),
            definition(2, "hdfs.address", None),
        ])
        .unwrap();

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn emptiness_covers_absent_and_zero_length() {
        let mut store =
            SliderConfigStore::from_definitions(vec![definition(1, "hdfs.address", None)]).unwrap();
        assert!(store.all()[0].is_empty());

        for config in store.all_mut() {
            config.value = Some(String::new());
        }
        assert!(store.all()[0].is_empty());

        for config in store.all_mut() {
            config.value = Some(" ".to_string());
        }
        assert!(!store.all()[0].is_empty());
    }
}
