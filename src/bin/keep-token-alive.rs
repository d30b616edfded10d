use anyhow::Result;
use keep_token_alive::cli::{self, telemetry};

// Main function
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Start the program
    let action = cli::start()?;

    // Handle the action
    let result = action.execute().await;

    telemetry::shutdown_tracer();

    result
}
