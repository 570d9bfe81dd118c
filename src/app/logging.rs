//! tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, LoggingSettings};

/// Install the global subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `settings.level`. Calling this more than
/// once keeps the first subscriber.
pub fn init(settings: &LoggingSettings) -> Result<(), AppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level).map_err(|e| {
            AppError::config_error(format!("Invalid logging.level '{}': {}", settings.level, e))
        })?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    // An already-installed subscriber is not an error here.
    let _ = if settings.json { builder.json().try_init() } else { builder.compact().try_init() };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_level_directive() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let settings = LoggingSettings { level: "slider_view=loud".to_string(), json: false };
        assert!(matches!(init(&settings), Err(AppError::Configuration(_))));
    }

    #[test]
    fn repeated_init_is_harmless() {
        let settings = LoggingSettings::default();
        assert!(init(&settings).is_ok());
        assert!(init(&settings).is_ok());
    }
}
