//! Published view status shared with the rest of the console.

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;

/// Result of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Deduplicated error messages in first-occurrence order.
    pub view_errors: Vec<String>,
    pub view_enabled: bool,
    /// Milliseconds since the Unix epoch at which the pass completed.
    pub mapper_time: i64,
}

impl ViewState {
    pub fn from_errors(view_errors: Vec<String>, mapper_time: i64) -> Self {
        let view_enabled = view_errors.is_empty();
        Self { view_errors, view_enabled, mapper_time }
    }
}

/// Handle to the view state; clones share the same slot.
///
/// Every [`publish`](Self::publish) replaces the whole state, so concurrent
/// passes resolve as last writer wins.
#[derive(Debug, Clone, Default)]
pub struct SharedViewState {
    inner: Arc<RwLock<ViewState>>,
}

impl SharedViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, state: ViewState) {
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *slot = state;
    }

    pub fn snapshot(&self) -> ViewState {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
