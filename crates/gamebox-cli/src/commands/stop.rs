//! `gbx stop` — Kill the dev container and clean up the session record.

use clap::Args;
use gamebox_common::config::SessionConfig;
use gamebox_session::manager::SessionManager;

/// Arguments for the `stop` command.
#[derive(Args, Debug)]
pub struct StopArgs {
    /// Discard the session record even if the kill fails.
    #[arg(short, long)]
    pub force: bool,
}

/// Executes the `stop` command.
///
/// # Errors
///
/// Returns an error if the runtime is unavailable, no session is
/// recorded, or the kill fails.
pub fn execute(args: StopArgs, config: SessionConfig) -> anyhow::Result<()> {
    tracing::info!(force = args.force, "stopping container");
    let manager = SessionManager::with_docker(config)?;
    manager.stop(args.force)?;
    eprintln!("Dev container stopped.");
    Ok(())
}
