pub mod loader;
pub mod settings;

pub use loader::{
    DEFAULT_SETTINGS_FILE, build_messages, build_store, load_settings, parse_settings_content,
};
pub use settings::{AmbariSettings, LoggingSettings, ViewSettings};
