use crate::{
    cli::globals::GlobalArgs,
    session::{client, login, read_json, Credentials, RefreshOutcome},
};
use anyhow::{Context, Result};
use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, info_span, instrument, Instrument};

/// Refresh the session of an existing token
///
/// The token is returned unchanged when the API reports `success: true`.
/// On `success: false` a new token is requested with the credentials.
/// Transport and parse errors are returned as is, without the login fallback.
///
/// # Errors
/// Returns an error if the refresh request fails, its body is not a refresh
/// response, or the fallback login fails.
#[instrument(skip(credentials, token), fields(email = %credentials.email))]
pub async fn refresh_token(
    globals: &GlobalArgs,
    credentials: &Credentials,
    token: SecretString,
) -> Result<SecretString> {
    let client = client()?;

    let ping_url = globals.ping_url()?;

    let span = info_span!(
        "session.refresh",
        http.method = "GET",
        url = %ping_url
    );
    let response = client
        .get(ping_url.clone())
        .header(AUTHORIZATION, token.expose_secret())
        .send()
        .instrument(span)
        .await
        .with_context(|| format!("refresh request to {ping_url} failed"))?;

    let outcome: RefreshOutcome = read_json(response, &ping_url, "refresh").await?;

    if !outcome.success {
        info!("session not refreshed ({}), logging in again", outcome.message);

        return login(globals, credentials).await;
    }

    debug!("session refreshed: {}", outcome.message);

    Ok(token)
}
