mod ambari_view_client;

pub use ambari_view_client::HttpViewParamsClient;
