//! Session token acquisition.
//!
//! [`login`] exchanges credentials for a new token. [`refresh_token`] pings
//! the API with an existing token and keeps it when the API reports
//! `success: true`, otherwise it falls back to [`login`].
//!
//! HTTP status codes are not used to decide the outcome: any response whose
//! body parses is accepted, only transport and parse errors fail.

pub mod login;
pub mod refresh;

pub use self::login::login;
pub use self::refresh::refresh_token;

use crate::APP_USER_AGENT;
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

/// Email and password used to obtain a new token
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(email: String, password: SecretString) -> Self {
        Self { email, password }
    }

    /// Both email and password are non-empty
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.expose_secret().is_empty()
    }
}

/// Login request body
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
        }
    }
}

/// Login response body
#[derive(Debug, Deserialize)]
pub struct LoginOutcome {
    pub token: String,
}

/// Refresh response body
#[derive(Debug, Deserialize)]
pub struct RefreshOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

fn client() -> Result<Client> {
    Ok(Client::builder().user_agent(APP_USER_AGENT).build()?)
}

/// Read the whole body and deserialize it, whatever the status code
async fn read_json<T: DeserializeOwned>(response: Response, url: &Url, kind: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        debug!("{} - {}", url, status);
    } else {
        warn!("{} - {}, processing body anyway", url, status);
    }

    let body = response
        .text()
        .await
        .with_context(|| format!("could not read {kind} response from {url}"))?;

    serde_json::from_str(&body)
        .with_context(|| format!("could not parse {kind} response from {url}"))
}
