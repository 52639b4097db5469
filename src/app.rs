//! Program to check that logging into a Moodle installation works.
//!
//! It follows the monitoring plugin contract used by Nagios and Icinga: it
//! prints one status line and exits with the verdict code.
//!
//! ```text
//! cargo run --bin check_moodle_login -- --target "https://moodle.example.com/" --username monitoring --password "s3cr3t"
//! OK - Login as monitoring successful
//! ```
//!
//! For installations that don't use login tokens:
//!
//! ```text
//! cargo run --bin check_moodle_login -- -t "https://moodle.example.com/" -u monitoring -p "s3cr3t" --skip-logintoken
//! ```
use std::ffi::OsString;
use std::sync::Arc;

use clap::Parser;

use super::config::{CheckConfig, PlainConfiguration};
use super::console::Console;
use super::logging::{self, LogLevel};
use super::output::OutputFormat;
use super::printer::Printer as _;
use super::service::Service;

/// Exit code for a bad command line (`EX_USAGE`).
///
/// It can't be mistaken for any of the verdict exit codes.
pub const USAGE_ERROR_EXIT_CODE: i32 = 64;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// URL of the Moodle installation.
    #[clap(short, long)]
    target: String,

    /// Username to use for authentication.
    #[clap(short, long)]
    username: String,

    /// Password to use for authentication.
    #[clap(short, long)]
    password: String,

    /// Don't fetch a login token, submit an empty one.
    #[clap(short = 's', long = "skip-logintoken")]
    skip_logintoken: bool,

    /// Timeout for each request, in seconds. No timeout by default.
    #[clap(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Diagnostics written to the standard error.
    #[clap(long, value_enum, default_value_t = LogLevel::Off)]
    log_level: LogLevel,

    /// Format of the status line.
    #[clap(long, value_enum, default_value_t = OutputFormat::Plugin)]
    output: OutputFormat,
}

impl From<Args> for PlainConfiguration {
    fn from(args: Args) -> Self {
        PlainConfiguration {
            target: args.target,
            username: args.username,
            password: args.password,
            skip_login_token: args.skip_logintoken,
            timeout_secs: args.timeout,
            output: args.output,
        }
    }
}

/// Runs the check with the process arguments and returns the exit code.
pub async fn run() -> i32 {
    run_with_args(std::env::args_os()).await
}

/// Runs the check with the given arguments and returns the exit code.
///
/// The first argument is the program name.
pub async fn run_with_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(err) => return usage_error(&err),
    };

    logging::setup(args.log_level);

    let config = match CheckConfig::try_from(PlainConfiguration::from(args)) {
        Ok(config) => config,
        Err(err) => {
            Console::new().eprintln(&format!("error: {err}"));
            return USAGE_ERROR_EXIT_CODE;
        }
    };

    let service = Service::new(Arc::new(config), Console::new());

    service.run_check().await.exit_code()
}

fn usage_error(err: &clap::Error) -> i32 {
    if let Err(print_err) = err.print() {
        tracing::warn!("Failed to print the usage error: {print_err}");
    }

    // `--help` and `--version` are reported as errors too.
    if err.use_stderr() {
        USAGE_ERROR_EXIT_CODE
    } else {
        0
    }
}
