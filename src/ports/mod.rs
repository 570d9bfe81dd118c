mod view_params_client;

pub use view_params_client::ViewParamsClient;
