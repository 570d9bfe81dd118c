//! Required-value checks over the slider config records.

use std::collections::HashSet;

use crate::domain::{MessageKey, Messages, SliderConfig, SliderConfigStore};

/// Dependency value that switches a conditional requirement on.
const ENABLED_VALUE: &str = "true";

/// Scan every record and return the deduplicated error messages.
///
/// A required record must have a value. A non-required record with a
/// dependency must have a value when the dependency's value is `"true"`,
/// compared case-insensitively.
pub fn validate(store: &SliderConfigStore, messages: &Messages) -> Vec<String> {
    let errors = store.all().iter().filter_map(|config| check_config(store, config, messages));
    dedup_preserving_order(errors)
}

fn check_config(store: &SliderConfigStore, config: &SliderConfig, messages: &Messages) -> Option<String> {
    if config.required() {
        return config
            .is_empty()
            .then(|| messages.format(MessageKey::ConfigIsEmpty, &[config.view_config_name()]));
    }

    let dependency = store.dependency_of(config)?;
    let gate_open =
        dependency.value.as_deref().is_some_and(|v| v.to_lowercase() == ENABLED_VALUE);

    (gate_open && config.is_empty()).then(|| {
        messages.format(
            MessageKey::ConfigIsEmptyRequiredBy,
            &[config.view_config_name(), dependency.view_config_name()],
        )
    })
}

fn dedup_preserving_order(errors: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    errors.filter(|e| seen.insert(e.clone())).collect()
}
