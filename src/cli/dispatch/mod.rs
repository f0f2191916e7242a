use crate::cli::actions::{server::Args, Action};
use anyhow::{Context, Result};

/// Map parsed CLI matches onto an [`Action`].
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(5000);

    let db_path = matches
        .get_one::<String>("db-path")
        .cloned()
        .context("missing required argument: --db-path")?;

    Ok(Action::Server(Args { port, db_path }))
}
