use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Raised before any network activity
    #[error("malformed URL {url:?}: {reason}")]
    MalformedUrl { url: String, reason: String },

    // Captured into an exception response
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("failed to read response body: {0}")]
    ResponseBody(#[from] std::io::Error),
    #[error("response body is not a JSON object: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    /// True for failures of the exchange itself, as opposed to its content.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::ResponseBody(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
