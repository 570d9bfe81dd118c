pub mod configuration;
pub mod error;
pub mod messages;
pub mod slider_config;
pub mod validation;
pub mod view_params;
pub mod view_state;

pub use configuration::{AmbariSettings, LoggingSettings, ViewSettings};
pub use error::AppError;
pub use messages::{MessageKey, Messages};
pub use slider_config::{ConfigId, SliderConfig, SliderConfigDefinition, SliderConfigStore};
pub use validation::validate;
pub use view_params::ViewParams;
pub use view_state::{SharedViewState, ViewState};
