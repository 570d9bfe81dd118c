use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ViewParams};
use crate::ports::ViewParamsClient;

/// In-memory `ViewParamsClient` that records how often it was called.
#[derive(Clone)]
pub struct FakeViewParamsClient {
    response: Result<ViewParams, String>,
    calls: Arc<Mutex<usize>>,
}

impl FakeViewParamsClient {
    pub fn with_params<'a>(properties: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self { response: Ok(properties.into_iter().collect()), calls: Arc::new(Mutex::new(0)) }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self { response: Err(reason.into()), calls: Arc::new(Mutex::new(0)) }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl ViewParamsClient for FakeViewParamsClient {
    fn fetch_view_params(&self) -> Result<ViewParams, AppError> {
        *self.calls.lock().unwrap() += 1;
        self.response.clone().map_err(AppError::ViewParamsRequest)
    }
}
