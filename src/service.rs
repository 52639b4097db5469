use std::sync::Arc;

use super::checks::token::LoginToken;
use super::checks::{login, token};
use super::config::CheckConfig;
use super::output;
use super::printer::Printer;
use super::session::Session;
use super::verdict::{Report, Verdict};

/// Runs one login check and prints its report.
///
/// The check is a straight sequence: fetch the login token (unless it is
/// skipped), submit the login form, classify the response. The first failing
/// step decides the report and nothing runs after it.
pub struct Service<P: Printer> {
    pub(crate) config: Arc<CheckConfig>,
    pub(crate) printer: P,
}

impl From<token::Error> for Report {
    fn from(err: token::Error) -> Self {
        Report::new(err.verdict(), err.to_string())
    }
}

impl From<login::Error> for Report {
    fn from(err: login::Error) -> Self {
        Report::new(err.verdict(), err.to_string())
    }
}

impl<P: Printer> Service<P> {
    #[must_use]
    pub fn new(config: Arc<CheckConfig>, printer: P) -> Self {
        Self { config, printer }
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    /// Runs the check and prints exactly one line with its report.
    pub async fn run_check(&self) -> Report {
        tracing::info!("Running login check against {} ...", self.config.target);

        let report = self.check().await;

        tracing::info!("Login check finished: {report}");

        self.printer
            .println(&output::render(&report, &self.config.target, self.config.output));

        report
    }

    async fn check(&self) -> Report {
        let session = match Session::new(self.config.timeout) {
            Ok(session) => session,
            Err(err) => {
                tracing::error!("{err}");
                return Report::new(Verdict::Unknown, err.to_string());
            }
        };

        let token = if self.config.skip_login_token {
            tracing::debug!("Skipping login token retrieval");
            LoginToken::default()
        } else {
            match token::fetch(&session, &self.config.target).await {
                Ok(token) => token,
                Err(err) => {
                    tracing::warn!("Login token retrieval failed: {err:?}");
                    return err.into();
                }
            }
        };

        match login::submit(&session, &self.config, &token).await {
            Ok(success) => Report::new(Verdict::Ok, success.to_string()),
            Err(err) => {
                tracing::warn!("Login failed: {err:?}");
                err.into()
            }
        }
    }
}
