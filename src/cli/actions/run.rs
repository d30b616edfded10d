use crate::cli::actions::{login, refresh, Action, MISSING_CREDENTIALS};
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => print_token(&login::execute(args).await?),
        Action::Refresh(args) => print_token(&refresh::execute(args).await?),
        Action::MissingCredentials => {
            warn!("no token requested, credentials are incomplete");
            println!("{MISSING_CREDENTIALS}");
        }
    }

    Ok(())
}

// stdout carries the token and nothing else
fn print_token(token: &SecretString) {
    println!("{}", token.expose_secret());
}
