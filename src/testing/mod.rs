mod fake_view_params_client;

pub use fake_view_params_client::FakeViewParamsClient;
