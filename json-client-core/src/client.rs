use std::borrow::Cow;
use std::io::Read;

use log::{debug, info, trace};
use serde::Serialize;
use url::Url;

use crate::auth::basic_auth_header;
use crate::connector::{HttpConnector, HttpRequest, Method};
use crate::error::{Error, Result};
use crate::response::{BodyStream, JsonObject, SimpleResponse};

const APPLICATION_JSON: &str = "application/json";

/// JSON over HTTP, one blocking exchange per call.
///
/// Generic over the connection implementation, so consumers can plug in
/// their own HTTP library by implementing [`HttpConnector`]. The client keeps
/// no state between calls and can be cloned and shared across threads.
///
/// Only the string entry points ([`get`](Self::get), [`post`](Self::post))
/// return `Err`, and only for a malformed URL. Everything that happens after
/// the URL is accepted ends up in the returned [`SimpleResponse`].
#[derive(Clone, Debug)]
pub struct SimpleJsonClient<C: HttpConnector> {
    connector: C,
}

impl<C: HttpConnector> SimpleJsonClient<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub fn get(&self, url: &str) -> Result<SimpleResponse> {
        let url = parse_url(url)?;
        Ok(self.get_url(&url))
    }

    pub fn get_url(&self, url: &Url) -> SimpleResponse {
        debug!("get() url={};", redacted(url));
        let request = open_request(Method::Get, url).header("Content-Type", APPLICATION_JSON);
        self.exchange(request)
    }

    pub fn post<B>(&self, url: &str, content: &B) -> Result<SimpleResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = parse_url(url)?;
        Ok(self.post_url(&url, content))
    }

    pub fn post_url<B>(&self, url: &Url, content: &B) -> SimpleResponse
    where
        B: Serialize + ?Sized,
    {
        debug!("post() url={};", redacted(url));
        let payload = match serde_json::to_vec(content) {
            Ok(payload) => payload,
            Err(e) => return exception_response(Method::Post, None, Error::Encode(e)),
        };

        let request = open_request(Method::Post, url)
            .header("Accept", APPLICATION_JSON)
            .header("Accept-Charset", "utf-8")
            .header("Cache-Control", "no-cache")
            .header("Content-Type", APPLICATION_JSON)
            .body(payload);
        self.exchange(request)
    }

    fn exchange(&self, request: HttpRequest<'_>) -> SimpleResponse {
        let method = request.method;
        let raw = match self.connector.execute(request) {
            Ok(raw) => raw,
            Err(e) => return exception_response(method, None, e),
        };

        let status = raw.status;
        debug!(
            "{}: status {}, reading {} stream",
            method,
            status,
            BodyStream::for_status(status)
        );
        match json_response_from(method, raw.body) {
            Ok(body) => SimpleResponse::json(status, body),
            Err(e) => exception_response(method, Some(status), e),
        }
    }
}

impl<C: HttpConnector + Default> Default for SimpleJsonClient<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

/// Parse a caller-supplied URL, rejecting anything that is not HTTP(S).
fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| Error::MalformedUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::MalformedUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {scheme}"),
        }),
    }
}

/// The URL with any password masked, for logging.
fn redacted(url: &Url) -> Cow<'_, str> {
    if url.password().is_none() {
        return Cow::Borrowed(url.as_str());
    }
    let mut masked = url.clone();
    // only fails for URLs that cannot carry credentials
    let _ = masked.set_password(Some("***"));
    Cow::Owned(masked.into())
}

fn open_request(method: Method, url: &Url) -> HttpRequest<'_> {
    let request = HttpRequest::new(method, url);
    match basic_auth_header(url) {
        Some(auth) => request.header("Authorization", auth),
        None => request,
    }
}

/// Read the whole stream as UTF-8 and parse it as a JSON object.
///
/// Takes the stream by value: it is released here whether reading or parsing
/// succeeds or not.
fn json_response_from(method: Method, mut stream: Box<dyn Read + Send>) -> Result<JsonObject> {
    let mut bytes = Vec::new();
    let read = stream.read_to_end(&mut bytes);
    drop(stream);
    trace!("{}: response stream released", method);
    read?;

    // undecodable sequences become U+FFFD rather than failing the read
    let text = String::from_utf8_lossy(&bytes);
    debug!("{}: retrieved JSON: {}", method, text);
    serde_json::from_str(&text).map_err(Error::Parse)
}

fn exception_response(method: Method, status: Option<u16>, cause: Error) -> SimpleResponse {
    info!(
        "{} failed (status {}): {}",
        method,
        status.map_or(-1, i32::from),
        cause
    );
    SimpleResponse::exception(status, cause)
}
