//! Check command: load view parameters and report whether the view can be enabled.

use std::path::PathBuf;

use serde::Serialize;

use crate::app::AppContext;
use crate::app::controller::{FetchStatus, SliderController};
use crate::domain::{SliderConfigStore, ViewState};
use crate::ports::ViewParamsClient;

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Settings file; `slider-view.toml` in the working directory when unset.
    pub settings_path: Option<PathBuf>,
    /// Validate the configured values without contacting Ambari.
    pub offline: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub fetch: FetchStatus,
    #[serde(flatten)]
    pub state: ViewState,
    #[serde(skip)]
    pub exit_code: i32,
}

pub fn execute<C: ViewParamsClient>(
    ctx: &AppContext<C>,
    store: &mut SliderConfigStore,
    offline: bool,
) -> CheckOutcome {
    let mut controller = SliderController::new(ctx, store);

    let (fetch, state) = if offline {
        (FetchStatus::Skipped, controller.finish_configuration())
    } else {
        controller.init_resources()
    };

    let exit_code = if state.view_enabled { 0 } else { 1 };
    CheckOutcome { fetch, state, exit_code }
}
