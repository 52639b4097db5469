//! Check verdicts and the one-line report printed for the monitoring system.
//!
//! The verdicts follow the monitoring plugin contract shared by Nagios and
//! Icinga:
//!
//! | Verdict    | Exit code |
//! |------------|-----------|
//! | `OK`       | 0         |
//! | `WARNING`  | 1         |
//! | `CRITICAL` | 2         |
//! | `UNKNOWN`  | 3         |
//!
//! `WARNING` is part of the contract but no login check produces it.
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Verdict {
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Ok => 0,
            Verdict::Warning => 1,
            Verdict::Critical => 2,
            Verdict::Unknown => 3,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Ok => "OK",
            Verdict::Warning => "WARNING",
            Verdict::Critical => "CRITICAL",
            Verdict::Unknown => "UNKNOWN",
        };

        f.write_str(label)
    }
}

/// The outcome of one check run.
///
/// It renders as the plugin status line: `<VERDICT> - <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub verdict: Verdict,
    pub message: String,
}

impl Report {
    #[must_use]
    pub fn new(verdict: Verdict, message: impl Into<String>) -> Self {
        Self {
            verdict,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.verdict.exit_code()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.verdict, self.message)
    }
}
