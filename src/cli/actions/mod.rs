pub mod login;
pub mod refresh;

// Internal "interpreter" for `Action`.
mod run;

/// Printed instead of a token when the credentials are incomplete
pub const MISSING_CREDENTIALS: &str = "loginEmail and loginPassword are required";

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Refresh(refresh::Args),
    MissingCredentials,
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
