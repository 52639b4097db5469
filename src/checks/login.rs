//! Login submission and response classification.
//!
//! A successful Moodle login redirects to the dashboard at `/my/`. A rejected
//! login renders the login form again with a `200 OK` status.
//!
//! Responses are classified in this order, the first match wins:
//!
//! | Final status             | Final URL        | Verdict    |
//! |--------------------------|------------------|------------|
//! | `200`                    | ends with `/my/` | `OK`       |
//! | `200`                    | anything else    | `CRITICAL` |
//! | `400..=405`, `500..=504` | any              | `CRITICAL` |
//! | anything else            | any              | `UNKNOWN`  |
use std::fmt;

use reqwest::Url;
use thiserror::Error;

use super::token::LoginToken;
use super::TransportError;
use crate::config::CheckConfig;
use crate::session::{self, Session};
use crate::verdict::Verdict;

/// Suffix of the URL the application lands on after a successful login.
pub const LANDING_PATH_SUFFIX: &str = "/my/";

/// A login that landed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success {
    pub username: String,
    pub final_url: Url,
}

impl fmt::Display for Success {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Login as {} successful", self.username)
    }
}

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Login as {username} failed")]
    AuthFailure { username: String, final_url: Url },
    #[error("Failed with HTTP status code {code}")]
    ServerError { code: u16 },
    #[error("Received HTTP status code: {code}")]
    UnexpectedStatus { code: u16 },
    #[error("Exception raised during login: {err}")]
    Transport { err: TransportError },
}

impl Error {
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        match self {
            Error::AuthFailure { .. } | Error::ServerError { .. } => Verdict::Critical,
            Error::UnexpectedStatus { .. } | Error::Transport { .. } => Verdict::Unknown,
        }
    }
}

/// Submits the login form and classifies the final response.
///
/// The form is sent on the session used to fetch the token, so the session
/// cookie the token belongs to is presented with it.
///
/// # Errors
///
/// Will return an error if the request fails or the final response does not
/// show a successful login.
pub async fn submit(session: &Session, config: &CheckConfig, token: &LoginToken) -> Result<Success, Error> {
    let url = session::login_url(&config.target).map_err(|e| Error::Transport { err: e.into() })?;

    tracing::debug!("Submitting login form for {} to {url} ...", config.username);

    let form = [
        ("username", config.username.as_str()),
        ("password", config.password.as_str()),
        ("logintoken", token.as_str()),
    ];

    let response = session
        .post_form(url, &form)
        .await
        .map_err(|e| Error::Transport { err: e.into() })?;

    let status = response.status().as_u16();
    let final_url = response.url().clone();

    tracing::debug!("Login form answered with {status} at {final_url}");

    classify(status, final_url, &config.username)
}

/// Classifies the final status and URL of a login submission.
///
/// # Errors
///
/// Will return an error for every response that is not a `200 OK` landing on
/// the dashboard.
pub fn classify(status: u16, final_url: Url, username: &str) -> Result<Success, Error> {
    match status {
        200 if final_url.as_str().ends_with(LANDING_PATH_SUFFIX) => Ok(Success {
            username: username.to_owned(),
            final_url,
        }),
        200 => Err(Error::AuthFailure {
            username: username.to_owned(),
            final_url,
        }),
        400..=405 | 500..=504 => Err(Error::ServerError { code: status }),
        code => Err(Error::UnexpectedStatus { code }),
    }
}
