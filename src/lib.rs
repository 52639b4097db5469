//! A monitoring plugin that checks whether logging into a [Moodle](https://moodle.org/)
//! installation works.
//!
//! A check run does what a user does in the browser:
//!
//! 1. Open the login page (`<target>/login/index.php`) and read the one-time
//!    login token from the form.
//! 2. Submit the username, password and login token with the session cookie
//!    received with the login page.
//! 3. Look at where the login ends: a successful Moodle login lands on the
//!    dashboard at `/my/`.
//!
//! The result is reported following the monitoring plugin contract used by
//! Nagios and Icinga: one status line on the standard output and the verdict
//! as the exit code.
//!
//! ```text
//! $ check_moodle_login -t https://moodle.example.com/ -u monitoring -p "s3cr3t"
//! OK - Login as monitoring successful
//! $ echo $?
//! 0
//! ```
//!
//! Refer to [`verdict`] for the exit codes and to [`checks::login`] for how
//! responses are classified.
pub mod app;
pub mod checks;
pub mod config;
pub mod console;
pub mod logger;
pub mod logging;
pub mod output;
pub mod printer;
pub mod service;
pub mod session;
pub mod verdict;
