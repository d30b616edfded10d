use crate::{
    cli::globals::GlobalArgs,
    session::{client, read_json, Credentials, LoginOutcome, LoginRequest},
};
use anyhow::{Context, Result};
use secrecy::SecretString;
use tracing::{debug, info_span, instrument, Instrument};

/// Exchange credentials for a new token
///
/// # Errors
/// Returns an error if the request cannot be sent or the response body is not a login response.
#[instrument(skip(credentials), fields(email = %credentials.email))]
pub async fn login(globals: &GlobalArgs, credentials: &Credentials) -> Result<SecretString> {
    let client = client()?;

    let login_url = globals.login_url()?;

    debug!("login URL: {}", login_url);

    let span = info_span!(
        "session.login",
        http.method = "POST",
        url = %login_url
    );
    let response = client
        .post(login_url.clone())
        .json(&LoginRequest::from(credentials))
        .send()
        .instrument(span)
        .await
        .with_context(|| format!("login request to {login_url} failed"))?;

    let outcome: LoginOutcome = read_json(response, &login_url, "login").await?;

    Ok(SecretString::from(outcome.token))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::login;
    use crate::session::test_support::{
        can_bind_localhost, credentials, globals_for, unreachable_globals, EMAIL, PASSWORD,
    };
    use crate::APP_USER_AGENT;
    use anyhow::Result;
    use secrecy::ExposeSecret;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn login_returns_token() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(header("Content-Type", "application/json"))
            .and(header("User-Agent", APP_USER_AGENT))
            .and(body_json(json!({ "email": EMAIL, "password": PASSWORD })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc123" })))
            .expect(1)
            .mount(&server)
            .await;

        let token = login(&globals_for(&server), &credentials()).await?;
        assert_eq!(token.expose_secret(), "abc123");
        Ok(())
    }

    #[tokio::test]
    async fn login_uses_configured_path() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "v2" })))
            .expect(1)
            .mount(&server)
            .await;

        let globals = globals_for(&server)
            .with_paths("/v2/session".to_string(), "/v2/ping".to_string());
        let token = login(&globals, &credentials()).await?;
        assert_eq!(token.expose_secret(), "v2");
        Ok(())
    }

    #[tokio::test]
    async fn login_ignores_status_code() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "token": "from-500" })))
            .mount(&server)
            .await;

        let token = login(&globals_for(&server), &credentials()).await?;
        assert_eq!(token.expose_secret(), "from-500");
        Ok(())
    }

    #[tokio::test]
    async fn login_malformed_body_fails() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = login(&globals_for(&server), &credentials())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("could not parse login response"));
        Ok(())
    }

    #[tokio::test]
    async fn login_missing_token_fails() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "bad credentials" })),
            )
            .mount(&server)
            .await;

        assert!(login(&globals_for(&server), &credentials()).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn login_unreachable_fails() {
        let err = login(&unreachable_globals(), &credentials())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("login request to"));
    }
}
