//! Map parsed CLI arguments to an [`Action`].
//!
//! Incomplete credentials never reach the network: they map to
//! [`Action::MissingCredentials`] before any URL is built.

use crate::cli::actions::{login, refresh, Action};
use crate::cli::commands::{
    ARG_API_HOST, ARG_API_PORT, ARG_LOGIN_EMAIL, ARG_LOGIN_PASSWORD, ARG_LOGIN_PATH,
    ARG_PING_PATH, ARG_TOKEN,
};
use crate::cli::globals::GlobalArgs;
use crate::session::Credentials;
use anyhow::{Context, Result};
use secrecy::SecretString;
use tracing::debug;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if the API host, port and paths do not form valid URLs.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let value = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();

    let credentials = Credentials::new(
        value(ARG_LOGIN_EMAIL),
        SecretString::from(value(ARG_LOGIN_PASSWORD)),
    );

    if !credentials.is_complete() {
        return Ok(Action::MissingCredentials);
    }

    let globals = GlobalArgs::new(value(ARG_API_HOST), value(ARG_API_PORT))
        .with_paths(value(ARG_LOGIN_PATH), value(ARG_PING_PATH));

    globals.login_url().context("invalid login endpoint")?;
    globals.ping_url().context("invalid refresh endpoint")?;

    debug!("Global args: {:?}", globals);

    match matches
        .get_one::<String>(ARG_TOKEN)
        .filter(|token| !token.is_empty())
    {
        Some(token) => Ok(Action::Refresh(refresh::Args {
            globals,
            credentials,
            token: SecretString::from(token.clone()),
        })),
        None => Ok(Action::Login(login::Args {
            globals,
            credentials,
        })),
    }
}
