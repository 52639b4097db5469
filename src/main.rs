//! Program to check a Moodle login.
//!
//! ```text
//! cargo run --bin check_moodle_login -- --target "https://moodle.example.com/" --username monitoring --password "s3cr3t"
//! ```
use login_checker::app;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = app::run().await;

    std::process::exit(exit_code);
}
