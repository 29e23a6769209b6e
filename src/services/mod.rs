pub mod http_transport;
pub mod api_client;

pub use http_transport::{ApiRequest, ApiResponse, GlooTransport, HttpMethod, HttpTransport};
pub use api_client::ApiClient;
