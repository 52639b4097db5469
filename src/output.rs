//! Rendering of the check report.
//!
//! The default `plugin` format is the status line monitoring systems expect:
//!
//! ```text
//! OK - Login as monitoring successful
//! ```
//!
//! The `json` format puts the same information on one JSON line:
//!
//! ```text
//! {"target":"https://moodle.example.com/","status":{"code":"OK","message":"Login as monitoring successful"}}
//! ```
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::verdict::{Report, Verdict};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plugin,
    Json,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub code: Verdict,
    pub message: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerOutput {
    pub target: String,
    pub status: Status,
}

/// Renders the report as a single line in the given format.
#[must_use]
pub fn render(report: &Report, target: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plugin => report.to_string(),
        OutputFormat::Json => {
            let output = CheckerOutput {
                target: target.to_owned(),
                status: Status {
                    code: report.verdict,
                    message: report.message.clone(),
                },
            };

            serde_json::to_string(&output).unwrap_or_else(|_| report.to_string())
        }
    }
}
