//! A stand-in for a Moodle installation.
//!
//! It serves only what the login check talks to:
//!
//! - `GET /login/index.php`: the login form with a login token, bound to the
//!   session cookie it sets.
//! - `POST /login/index.php`: accepts the form when the credentials, the token
//!   and the session cookie match, and redirects to the dashboard.
//! - `GET /my/`: the dashboard.
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use tokio::task::JoinHandle;

pub const USERNAME: &str = "monitoring";
pub const PASSWORD: &str = "s3cr3t";
pub const LOGIN_TOKEN: &str = "Xy12AbCdEf34GhIjKl56MnOpQr78StUv";
pub const SESSION_COOKIE: &str = "MoodleSession=6mvbq0ptl8hqmiiq2k9kl7hbmv";

/// What the login page answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPage {
    WithToken,
    WithoutToken,
    Status(u16),
}

/// What the login form submission answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginSubmission {
    /// Checks the submitted form like Moodle does.
    Authenticate { require_token: bool },
    /// Sends the form back to the login form with a `307`, which keeps the
    /// method and body, so the client never gets a final response.
    RedirectToItself,
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct Submission {
    pub form: HashMap<String, String>,
    pub cookie: Option<String>,
}

#[derive(Debug, Default)]
pub struct Requests {
    pub login_page: usize,
    pub submissions: Vec<Submission>,
}

#[derive(Clone)]
struct AppState {
    login_page: LoginPage,
    login_submission: LoginSubmission,
    requests: Arc<Mutex<Requests>>,
}

pub struct Environment {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Requests>>,
    join_handle: JoinHandle<()>,
}

impl Environment {
    /// Starts the server on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Panics if the server can't bind the socket.
    pub async fn start(login_page: LoginPage, login_submission: LoginSubmission) -> Self {
        let requests = Arc::new(Mutex::new(Requests::default()));

        let state = AppState {
            login_page,
            login_submission,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/login/index.php", get(login_page_handler).post(login_handler))
            .route("/my/", get(dashboard_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("it should bind the fake Moodle server");
        let addr = listener.local_addr().expect("it should get the fake Moodle server address");

        let join_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("the fake Moodle server should keep running");
        });

        Self {
            addr,
            requests,
            join_handle,
        }
    }

    /// Base URL of the installation.
    pub fn target(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn login_page_requests(&self) -> usize {
        self.requests.lock().unwrap().login_page
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.requests.lock().unwrap().submissions.clone()
    }

    pub fn stop(self) {
        self.join_handle.abort();
    }
}

/// A server that accepts connections and never answers.
pub struct Unresponsive {
    pub addr: SocketAddr,
    join_handle: JoinHandle<()>,
}

impl Unresponsive {
    /// # Panics
    ///
    /// Panics if the listener can't bind the socket.
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("it should bind the unresponsive server");
        let addr = listener.local_addr().expect("it should get the unresponsive server address");

        let join_handle = tokio::spawn(async move {
            let mut open_connections = Vec::new();

            while let Ok((stream, _)) = listener.accept().await {
                open_connections.push(stream);
            }
        });

        Self { addr, join_handle }
    }

    pub fn target(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn stop(self) {
        self.join_handle.abort();
    }
}

/// An address nothing listens on.
pub fn closed_port_target() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}/")
}

fn login_form(token: Option<&str>) -> String {
    let token_input = token
        .map(|token| format!(r#"<input type="hidden" name="logintoken" value="{token}">"#))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<body>
<form class="login-form" action="/login/index.php" method="post" id="login">
    <input id="anchor" type="hidden" name="anchor" value="">
    {token_input}
    <input type="text" name="username" id="username" value="">
    <input type="password" name="password" id="password" value="">
    <button type="submit" id="loginbtn">Log in</button>
</form>
</body>
</html>"#
    )
}

fn status(code: u16) -> Response {
    StatusCode::from_u16(code).unwrap().into_response()
}

async fn login_page_handler(State(state): State<AppState>) -> Response {
    state.requests.lock().unwrap().login_page += 1;

    match state.login_page {
        LoginPage::WithToken => ([(SET_COOKIE, format!("{SESSION_COOKIE}; path=/"))], Html(login_form(Some(LOGIN_TOKEN)))).into_response(),
        LoginPage::WithoutToken => Html(login_form(None)).into_response(),
        LoginPage::Status(code) => status(code),
    }
}

async fn login_handler(State(state): State<AppState>, headers: HeaderMap, Form(form): Form<HashMap<String, String>>) -> Response {
    let cookie = headers.get(COOKIE).and_then(|value| value.to_str().ok()).map(ToOwned::to_owned);

    state.requests.lock().unwrap().submissions.push(Submission {
        form: form.clone(),
        cookie: cookie.clone(),
    });

    match state.login_submission {
        LoginSubmission::Status(code) => status(code),
        LoginSubmission::RedirectToItself => Redirect::temporary("/login/index.php").into_response(),
        LoginSubmission::Authenticate { require_token } => {
            let credentials_match =
                form.get("username").map(String::as_str) == Some(USERNAME) && form.get("password").map(String::as_str) == Some(PASSWORD);

            let token_matches = !require_token
                || (form.get("logintoken").map(String::as_str) == Some(LOGIN_TOKEN)
                    && cookie.is_some_and(|cookie| cookie.contains(SESSION_COOKIE)));

            if credentials_match && token_matches {
                Redirect::to("/my/").into_response()
            } else {
                Html(login_form(Some(LOGIN_TOKEN))).into_response()
            }
        }
    }
}

async fn dashboard_handler() -> Html<&'static str> {
    Html("<html><body><h1>Dashboard</h1></body></html>")
}
