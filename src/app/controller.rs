//! Slider view controller: load view-instance parameters, then decide whether
//! the view can be enabled.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::{SliderConfigStore, ViewParams, ViewState, validate};
use crate::ports::ViewParamsClient;

/// Which continuation the parameter fetch took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchStatus {
    /// Properties were applied to every record.
    Loaded { properties: usize },
    /// The request failed; records kept their previous values.
    Failed { reason: String },
    /// No request was made.
    Skipped,
}

/// Drives the fetch → reconcile → validate sequence over a record store.
pub struct SliderController<'a, C: ViewParamsClient> {
    ctx: &'a AppContext<C>,
    store: &'a mut SliderConfigStore,
}

impl<'a, C: ViewParamsClient> SliderController<'a, C> {
    pub fn new(ctx: &'a AppContext<C>, store: &'a mut SliderConfigStore) -> Self {
        Self { ctx, store }
    }

    /// Load resources on start-up.
    pub fn init_resources(&mut self) -> (FetchStatus, ViewState) {
        self.load_view_params()
    }

    /// Fetch the view-instance properties and run whichever continuation applies.
    ///
    /// Both paths end in [`finish_configuration`](Self::finish_configuration);
    /// the returned state is the one this pass published, even if another pass
    /// has overwritten the shared slot since.
    pub fn load_view_params(&mut self) -> (FetchStatus, ViewState) {
        match self.ctx.client().fetch_view_params() {
            Ok(params) => {
                info!(properties = params.len(), "Loaded view instance properties");
                let state = self.apply_view_params(&params);
                (FetchStatus::Loaded { properties: params.len() }, state)
            }
            Err(err) => {
                warn!(error = %err, "Could not load view instance properties; validating current values");
                let state = self.finish_configuration();
                (FetchStatus::Failed { reason: err.to_string() }, state)
            }
        }
    }

    /// Overwrite every record's value from `params`, then validate.
    ///
    /// Records whose key is missing from `params` end up with no value.
    pub fn apply_view_params(&mut self, params: &ViewParams) -> ViewState {
        for config in self.store.all_mut() {
            config.value = params.get(config.view_config_name()).map(str::to_string);
            debug!(
                config = config.view_config_name(),
                present = config.value.is_some(),
                "Applied view property"
            );
        }
        self.finish_configuration()
    }

    /// Validate all records and publish the result.
    pub fn finish_configuration(&self) -> ViewState {
        let errors = validate(&*self.store, self.ctx.messages());
        let state = ViewState::from_errors(errors, Utc::now().timestamp_millis());

        info!(
            enabled = state.view_enabled,
            errors = state.view_errors.len(),
            "Published slider view state"
        );
        self.ctx.view_state().publish(state.clone());
        state
    }
}
