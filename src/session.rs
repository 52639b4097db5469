//! The HTTP session shared by the two requests of a check.
//!
//! Moodle binds the issued login token to the session cookie it sets on the
//! login page, so the token is only accepted if the same cookie comes back
//! with the login form. The session keeps a cookie store for the lifetime of
//! one check run.
//!
//! URL components in this context:
//!
//! ```text
//! https://moodle.example.com/campus/login/index.php
//! \_______________________________/\______________/
//!                |                        |
//!             target                 login path
//! ```
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client as ReqwestClient, Response, Url};
use thiserror::Error;

/// Path of the login form, relative to the target.
pub const LOGIN_PATH: &str = "login/index.php";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Failed to build the HTTP session: {err}")]
    ClientBuildingError { err: Arc<reqwest::Error> },
}

pub struct Session {
    reqwest: ReqwestClient,
}

impl Session {
    /// Builds a session with an empty cookie store.
    ///
    /// Without a `timeout` requests never time out, which is the HTTP client
    /// default.
    ///
    /// # Errors
    ///
    /// Will return an error if the underlying HTTP client can't be built (for
    /// example, when the TLS backend fails to initialize).
    pub fn new(timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = ReqwestClient::builder().cookie_store(true).user_agent(USER_AGENT);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let reqwest = builder.build().map_err(|e| Error::ClientBuildingError { err: e.into() })?;

        Ok(Self { reqwest })
    }

    /// # Errors
    ///
    /// Will return an error if the request fails before a response arrives.
    pub async fn get(&self, url: Url) -> Result<Response, reqwest::Error> {
        self.reqwest.get(url).send().await
    }

    /// Sends a form-encoded POST, following redirects.
    ///
    /// # Errors
    ///
    /// Will return an error if the request fails before a response arrives.
    pub async fn post_form(&self, url: Url, form: &[(&str, &str)]) -> Result<Response, reqwest::Error> {
        self.reqwest.post(url).form(form).send().await
    }
}

/// Resolves the login form URL against the target.
///
/// It follows the standard relative reference resolution: a last path segment
/// of the target without a trailing slash is replaced.
///
/// # Errors
///
/// Will return an error if the target is not an absolute URL.
pub fn login_url(target: &str) -> Result<Url, url::ParseError> {
    Url::parse(target)?.join(LOGIN_PATH)
}
