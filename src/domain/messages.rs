//! Localized error messages.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use minijinja::{Environment, context};
use tracing::warn;

use crate::domain::AppError;

/// Identifiers of the messages the validation pass can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    /// `args[0]` = config name.
    ConfigIsEmpty,
    /// `args[0]` = config name, `args[1]` = name of the config that requires it.
    ConfigIsEmptyRequiredBy,
}

impl MessageKey {
    pub const ALL: [MessageKey; 2] = [MessageKey::ConfigIsEmpty, MessageKey::ConfigIsEmptyRequiredBy];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::ConfigIsEmpty => "error.config_is_empty",
            MessageKey::ConfigIsEmptyRequiredBy => "error.config_is_empty_2",
        }
    }

    fn default_template(&self) -> &'static str {
        match self {
            MessageKey::ConfigIsEmpty => "config is empty: {{ args[0] }}",
            MessageKey::ConfigIsEmptyRequiredBy => {
                "config is empty: {{ args[0] }} (required by {{ args[1] }})"
            }
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| AppError::UnknownMessageKey(s.to_string()))
    }
}

/// Message catalog rendered with minijinja; positional arguments are
/// available to templates as `args`.
#[derive(Debug, Clone)]
pub struct Messages {
    env: Environment<'static>,
    overrides: BTreeMap<MessageKey, String>,
}

impl Default for Messages {
    fn default() -> Self {
        Self { env: Environment::new(), overrides: BTreeMap::new() }
    }
}

impl Messages {
    /// Catalog with templates replaced from a `key -> template` table.
    ///
    /// Every override is rendered once up front so syntax errors surface here.
    pub fn with_overrides(table: &BTreeMap<String, String>) -> Result<Self, AppError> {
        let mut messages = Self::default();
        for (key, template) in table {
            let key = key.parse::<MessageKey>()?;
            messages.env.render_str(template, context! { args => ["", ""] }).map_err(|e| {
                AppError::ParseError { what: format!("message template '{}'", key), details: e.to_string() }
            })?;
            messages.overrides.insert(key, template.clone());
        }
        Ok(messages)
    }

    pub fn template(&self, key: MessageKey) -> &str {
        self.overrides.get(&key).map(String::as_str).unwrap_or_else(|| key.default_template())
    }

    /// Render `key` with positional arguments. Missing arguments render empty.
    pub fn format(&self, key: MessageKey, args: &[&str]) -> String {
        let ctx = context! { args => args };
        match self.env.render_str(self.template(key), &ctx) {
            Ok(rendered) => rendered,
            Err(err) => {
                warn!(key = key.as_str(), error = %err, "Message override failed to render; using default");
                self.env
                    .render_str(key.default_template(), &ctx)
                    .unwrap_or_else(|_| format!("{}: {}", key, args.join(", ")))
            }
        }
    }
}
