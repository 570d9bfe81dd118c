//! Check command implementation.

use std::path::PathBuf;

use super::OutputFormat;
use crate::app::controller::FetchStatus;
use crate::domain::configuration::load_settings;
use crate::domain::{AppError, SharedViewState};

pub fn run_check(config: Option<PathBuf>, offline: bool, format: OutputFormat) -> Result<i32, AppError> {
    let settings = load_settings(config.as_deref())?;
    crate::app::logging::init(&settings.logging)?;

    let outcome = crate::app::api::check_with_settings(&settings, offline, &SharedViewState::new())?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome).map_err(|e| AppError::ParseError {
                what: "check outcome".to_string(),
                details: e.to_string(),
            })?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            if let FetchStatus::Failed { reason } = &outcome.fetch {
                println!("⚠️  Using configured values: {}", reason);
            }
            if outcome.state.view_enabled {
                println!("✅ Slider view enabled");
            } else {
                println!("❌ Slider view disabled ({} error(s))", outcome.state.view_errors.len());
                for error in &outcome.state.view_errors {
                    println!("  • {}", error);
                }
            }
        }
    }

    Ok(outcome.exit_code)
}
