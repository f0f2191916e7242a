use anyhow::Result;
use kasbuku::cli::start;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the CLI, initialize logging and obtain the action to run
    let action = start()?;

    action.execute().await
}
