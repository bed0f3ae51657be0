use std::fmt;

use serde_json::{Map, Value};

use crate::error::Error;

/// A parsed JSON object body.
pub type JsonObject = Map<String, Value>;

/// Statuses at or above this are read from the error stream.
const ERROR_STREAM_THRESHOLD: u16 = 400;

/// Which of the two response streams a body is read from.
///
/// This is not the same boundary as [`SimpleResponse::is_error`]: a 3xx
/// response is read from the success stream but still counts as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyStream {
    Success,
    Error,
}

impl BodyStream {
    pub fn for_status(status: u16) -> Self {
        if status < ERROR_STREAM_THRESHOLD {
            BodyStream::Success
        } else {
            BodyStream::Error
        }
    }
}

impl fmt::Display for BodyStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyStream::Success => write!(f, "success"),
            BodyStream::Error => write!(f, "error"),
        }
    }
}

/// Outcome of a single GET or POST exchange.
///
/// Exactly one variant is produced per call. Neither holds on to the
/// connection or its streams.
#[derive(Debug)]
pub enum SimpleResponse {
    /// The server answered and its body parsed as a JSON object.
    Json { status: u16, body: JsonObject },
    /// The exchange failed, or the body was not a JSON object. `status` is
    /// whatever the server sent before things went wrong, if anything.
    Exception { status: Option<u16>, cause: Error },
}

impl SimpleResponse {
    pub fn json(status: u16, body: JsonObject) -> Self {
        SimpleResponse::Json { status, body }
    }

    pub fn exception(status: Option<u16>, cause: Error) -> Self {
        SimpleResponse::Exception { status, cause }
    }

    /// Anything but a 2xx JSON response is an error.
    pub fn is_error(&self) -> bool {
        match self {
            SimpleResponse::Json { status, .. } => !(200..300).contains(status),
            SimpleResponse::Exception { .. } => true,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SimpleResponse::Json { status, .. } => Some(*status),
            SimpleResponse::Exception { status, .. } => *status,
        }
    }

    /// Status as an integer, `-1` when none was obtained.
    pub fn status_code(&self) -> i32 {
        self.status().map_or(-1, i32::from)
    }

    pub fn body(&self) -> Option<&JsonObject> {
        match self {
            SimpleResponse::Json { body, .. } => Some(body),
            SimpleResponse::Exception { .. } => None,
        }
    }

    pub fn into_body(self) -> Option<JsonObject> {
        match self {
            SimpleResponse::Json { body, .. } => Some(body),
            SimpleResponse::Exception { .. } => None,
        }
    }

    pub fn cause(&self) -> Option<&Error> {
        match self {
            SimpleResponse::Json { .. } => None,
            SimpleResponse::Exception { cause, .. } => Some(cause),
        }
    }
}

impl fmt::Display for SimpleResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimpleResponse::Json { status, body } => {
                // Map<String, Value> has no Display of its own
                let body = Value::Object(body.clone());
                write!(f, "[{}|{}]", status, body)
            }
            SimpleResponse::Exception { cause, .. } => {
                write!(f, "[{}|{}]", self.status_code(), cause)
            }
        }
    }
}
