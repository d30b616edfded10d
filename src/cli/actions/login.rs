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
}

/// Execute the login action.
/// # Errors
/// Returns an error if no token could be obtained.
pub async fn execute(args: Args) -> Result<SecretString> {
    debug!("requesting a new token from {}", args.globals.api_host);

    session::login(&args.globals, &args.credentials).await
}
