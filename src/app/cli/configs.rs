//! Configs command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_configs(config: Option<PathBuf>) -> Result<(), AppError> {
    let summaries = crate::app::api::list_configs(config.as_deref())?;

    for summary in summaries {
        let requirement = match (&summary.required_by, summary.required) {
            (_, true) => "required".to_string(),
            (Some(gate), false) => format!("required when {} is true", gate),
            (None, false) => "optional".to_string(),
        };
        match &summary.value {
            Some(value) => println!("{:>3}  {} ({}) = {}", summary.id, summary.view_config_name, requirement, value),
            None => println!("{:>3}  {} ({})", summary.id, summary.view_config_name, requirement),
        }
    }
    Ok(())
}
