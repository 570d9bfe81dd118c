//! slider-view: load Ambari Slider view-instance parameters and decide whether
//! the Slider view can be enabled.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, CheckOptions, CheckOutcome, ConfigSummary, FetchStatus, check, check_with_client,
    check_with_settings, list_configs,
};
pub use app::controller::SliderController;
pub use domain::{
    MessageKey, Messages, SharedViewState, SliderConfig, SliderConfigDefinition, SliderConfigStore,
    ViewParams, ViewSettings, ViewState, validate,
};
pub use ports::ViewParamsClient;
pub use services::HttpViewParamsClient;
