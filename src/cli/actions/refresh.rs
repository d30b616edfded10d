use crate::{
    cli::globals::GlobalArgs,
    session::{self, Credentials},
};
use anyhow::Result;
use secrecy::SecretString;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub credentials: Credentials,
    pub token: SecretString,
}

/// Execute the refresh action.
/// # Errors
/// Returns an error if the refresh request or the fallback login fails.
pub async fn execute(args: Args) -> Result<SecretString> {
    debug!("refreshing session on {}", args.globals.api_host);

    session::refresh_token(&args.globals, &args.credentials, args.token).await
}
