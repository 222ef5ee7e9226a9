//! `gbx start` — Start the dev container and record its identity.

use gamebox_common::config::SessionConfig;
use gamebox_session::manager::SessionManager;

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Executes the `start` command.
///
/// # Errors
///
/// Returns an error if the runtime is unavailable, the container cannot
/// be started, or its identity cannot be recorded.
pub fn execute(config: SessionConfig) -> anyhow::Result<()> {
    let lockfile = config.lockfile.clone();
    let manager = SessionManager::with_docker(config)?;
    let id = manager.start()?;

    eprintln!();
    eprintln!("  {GREEN}●{RESET} {BOLD}dev container running{RESET} {DIM}[{id}]{RESET}");
    eprintln!("  {DIM}Session record: {}{RESET}", lockfile.display());
    eprintln!();
    eprintln!("  Use {BOLD}gbx shell{RESET} to attach, {BOLD}gbx stop{RESET} when done.");
    Ok(())
}
