//! View-params request port.

use crate::domain::{AppError, ViewParams};

/// Port for the `slider.getViewParams` request.
///
/// Implementations fetch the property mapping of the current view instance;
/// the instance identity is part of the implementation's own configuration.
pub trait ViewParamsClient {
    fn fetch_view_params(&self) -> Result<ViewParams, AppError>;
}
