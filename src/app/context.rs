use crate::domain::{Messages, SharedViewState};
use crate::ports::ViewParamsClient;

/// Application context holding dependencies for the Slider controller.
pub struct AppContext<C: ViewParamsClient> {
    client: C,
    messages: Messages,
    view_state: SharedViewState,
}

impl<C: ViewParamsClient> AppContext<C> {
    /// Create a new application context.
    pub fn new(client: C, messages: Messages, view_state: SharedViewState) -> Self {
        Self { client, messages, view_state }
    }

    /// Get a reference to the view-params client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the message catalog.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Get the handle to the published view state.
    pub fn view_state(&self) -> &SharedViewState {
        &self.view_state
    }
}
