//! View-instance properties returned by the `slider.getViewParams` request.

use std::collections::BTreeMap;

use serde_json::Value;

/// JSON pointer to the property mapping inside a view-instance document.
const PROPERTIES_POINTER: &str = "/ViewInstanceInfo/properties";

/// Mapping of view-instance property names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    properties: BTreeMap<String, String>,
}

impl ViewParams {
    /// Extract `ViewInstanceInfo.properties` from a response document.
    ///
    /// Any other shape yields an empty mapping. `null` entries are treated as
    /// absent; other non-string scalars are stringified.
    pub fn from_response(document: &Value) -> Self {
        let Some(Value::Object(map)) = document.pointer(PROPERTIES_POINTER) else {
            return Self::default();
        };

        let properties = map
            .iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), value))
            })
            .collect();

        Self { properties }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ViewParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { properties: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}
