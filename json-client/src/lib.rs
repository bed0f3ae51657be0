mod config;
mod connector;

pub use config::ClientConfig;
#[cfg(feature = "ureq-client")]
pub use connector::UreqConnector;

// Re-export core types and traits
pub use json_client_core::{
    base64_encode, basic_auth_header, error, serde_json, url, BodyStream, Error, HttpConnector,
    HttpRequest, JsonObject, Method, RawResponse, Result, SimpleJsonClient, SimpleResponse,
};

/// A [`SimpleJsonClient`] backed by ureq.
#[cfg(feature = "ureq-client")]
pub type JsonClient = SimpleJsonClient<UreqConnector>;

/// Build a ureq-backed client from `config`.
#[cfg(feature = "ureq-client")]
pub fn client_with_config(config: &ClientConfig) -> JsonClient {
    SimpleJsonClient::new(UreqConnector::with_config(config))
}
