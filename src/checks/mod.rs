//! The two HTTP steps of a login check.
//!
//! 1. [`token`]: fetch the login page and extract the login token.
//! 2. [`login`]: submit the credentials and classify the response.
//!
//! Transport failures of both steps are reported by category, so the status
//! line stays short and stable across client versions.
use std::error::Error;
use std::fmt;
use std::sync::Arc;

pub mod login;
pub mod token;

pub type DynError = Arc<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    InvalidUrl,
    Timeout,
    ConnectionError,
    TooManyRedirects,
    ContentDecodingError,
    RequestException,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportErrorKind::InvalidUrl => "InvalidUrl",
            TransportErrorKind::Timeout => "Timeout",
            TransportErrorKind::ConnectionError => "ConnectionError",
            TransportErrorKind::TooManyRedirects => "TooManyRedirects",
            TransportErrorKind::ContentDecodingError => "ContentDecodingError",
            TransportErrorKind::RequestException => "RequestException",
        };

        f.write_str(name)
    }
}

impl From<&reqwest::Error> for TransportErrorKind {
    fn from(err: &reqwest::Error) -> Self {
        // Connect timeouts are both `timeout` and `connect` errors.
        if err.is_builder() {
            TransportErrorKind::InvalidUrl
        } else if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::ConnectionError
        } else if err.is_redirect() {
            TransportErrorKind::TooManyRedirects
        } else if err.is_body() || err.is_decode() {
            TransportErrorKind::ContentDecodingError
        } else {
            TransportErrorKind::RequestException
        }
    }
}

/// A request that failed before a complete response was received.
///
/// It displays as its category only. The underlying error is kept as the
/// source for diagnostics.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub kind: TransportErrorKind,
    source: DynError,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl Error for TransportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            kind: TransportErrorKind::from(&err),
            source: Arc::new(err),
        }
    }
}

impl From<url::ParseError> for TransportError {
    fn from(err: url::ParseError) -> Self {
        Self {
            kind: TransportErrorKind::InvalidUrl,
            source: Arc::new(err),
        }
    }
}
