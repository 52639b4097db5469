//! Login token retrieval.
//!
//! Moodle renders a one-time anti-forgery token in the login form:
//!
//! ```text
//! <input type="hidden" name="logintoken" value="Xy12AbCdEf34GhIjKl56MnOpQr78StUv">
//! ```
//!
//! Only that exact markup is recognized.
use std::fmt::{self, Display};

use lazy_static::lazy_static;
use regex::Regex;
use reqwest::StatusCode;
use thiserror::Error;

use super::TransportError;
use crate::session::{self, Session};
use crate::verdict::Verdict;

lazy_static! {
    static ref LOGIN_TOKEN_INPUT: Regex = Regex::new(r#"<input type="hidden" name="logintoken" value="([a-zA-Z0-9]+)">"#)
        .expect("the login token pattern should be a valid regex");
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginToken(String);

impl LoginToken {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LoginToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Exception raised during logintoken retrieval: {err}")]
    Transport { err: TransportError },
    #[error("Failed to retrieve logintoken. HTTP status code: {code}")]
    UnsuccessfulResponse { code: u16 },
    #[error("Couldn't find logintoken")]
    TokenNotFound,
}

impl Error {
    /// A check that can't get a login token can't tell whether login works.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::Unknown
    }
}

/// Fetches the login page and extracts the login token from it.
///
/// # Errors
///
/// Will return an error if:
///
/// - The request fails (including a target that is not a valid URL).
/// - The login page is not served with a `200 OK` status.
/// - The page does not contain the login token input.
pub async fn fetch(session: &Session, target: &str) -> Result<LoginToken, Error> {
    let url = session::login_url(target).map_err(|e| Error::Transport { err: e.into() })?;

    tracing::debug!("Fetching login token from {url} ...");

    let response = session.get(url).await.map_err(|e| Error::Transport { err: e.into() })?;

    let status = response.status();

    if status != StatusCode::OK {
        return Err(Error::UnsuccessfulResponse { code: status.as_u16() });
    }

    let body = response.text().await.map_err(|e| Error::Transport { err: e.into() })?;

    extract(&body).ok_or(Error::TokenNotFound)
}

/// Extracts the login token from the HTML of the login page.
#[must_use]
pub fn extract(html: &str) -> Option<LoginToken> {
    LOGIN_TOKEN_INPUT
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|value| LoginToken::new(value.as_str()))
}
