mod auth;
mod client;
mod connector;
pub mod error;
mod response;

pub use auth::{base64_encode, basic_auth_header};
pub use client::SimpleJsonClient;
pub use connector::{HttpConnector, HttpRequest, Method, RawResponse};
pub use error::{Error, Result};
pub use response::{BodyStream, JsonObject, SimpleResponse};

// re-export libraries for consumers
pub use serde_json;
pub use url;
