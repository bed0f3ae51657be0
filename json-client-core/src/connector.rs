use std::fmt;
use std::io::Read;

use url::Url;

use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request, fully described before the connection is opened.
#[derive(Clone, Debug)]
pub struct HttpRequest<'a> {
    pub method: Method,
    pub url: &'a Url,
    pub headers: Vec<(&'static str, String)>,
    /// Only set for POST.
    pub body: Option<Vec<u8>>,
}

impl<'a> HttpRequest<'a> {
    pub fn new(method: Method, url: &'a Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// What the connector hands back once the status line has been read.
///
/// `body` is whichever stream the status selects (see
/// [`BodyStream`](crate::BodyStream)). Dropping it releases the connection.
pub struct RawResponse {
    pub status: u16,
    pub body: Box<dyn Read + Send>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Read + Send + 'static) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Minimal blocking HTTP connection trait that can be implemented with any
/// HTTP library.
///
/// Implementations open a connection, send the request headers and body, and
/// return the status together with the body stream. Error statuses are not
/// failures at this level: a 404 or 500 must come back as a `RawResponse`
/// carrying the error stream. Only connection, write and protocol problems
/// are returned as `Err`.
pub trait HttpConnector: Send + Sync + Clone {
    fn execute(&self, request: HttpRequest<'_>) -> Result<RawResponse>;
}
