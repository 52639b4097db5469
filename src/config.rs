use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::output::OutputFormat;

/// Raw check settings, as they come from the command line.
///
/// Configuration does not need to be valid.
pub struct PlainConfiguration {
    pub target: String,
    pub username: String,
    pub password: String,
    pub skip_login_token: bool,
    pub timeout_secs: Option<u64>,
    pub output: OutputFormat,
}

/// Validated configuration for one check run.
///
/// The target is kept as given. It is only parsed when the requests are
/// built, so a malformed target is reported through the check verdict.
#[derive(Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub target: String,
    pub username: String,
    pub password: String,
    pub skip_login_token: bool,
    pub timeout: Option<Duration>,
    pub output: OutputFormat,
}

impl fmt::Debug for CheckConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckConfig")
            .field("target", &self.target)
            .field("username", &self.username)
            .field("password", &"***")
            .field("skip_login_token", &self.skip_login_token)
            .field("timeout", &self.timeout)
            .field("output", &self.output)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Invalid timeout: it must be at least one second")]
    InvalidTimeout,
}

impl TryFrom<PlainConfiguration> for CheckConfig {
    type Error = ConfigurationError;

    fn try_from(plain_config: PlainConfiguration) -> Result<Self, Self::Error> {
        let timeout = match plain_config.timeout_secs {
            Some(0) => return Err(ConfigurationError::InvalidTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(CheckConfig {
            target: plain_config.target,
            username: plain_config.username,
            password: plain_config.password,
            skip_login_token: plain_config.skip_login_token,
            timeout,
            output: plain_config.output,
        })
    }
}
