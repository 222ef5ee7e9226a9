//! `gbx shell` — Open an interactive shell inside the dev container.

use gamebox_common::config::SessionConfig;
use gamebox_session::manager::SessionManager;

/// Executes the `shell` command.
///
/// Starts a container first when no session is recorded, then attaches
/// and blocks for the whole remote shell session. The remote shell's
/// exit code becomes the process exit code.
///
/// # Errors
///
/// Returns an error if the runtime is unavailable or the attach cannot
/// be initiated.
pub fn execute(config: SessionConfig) -> anyhow::Result<()> {
    let manager = SessionManager::with_docker(config)?;
    let exit_code = manager.shell()?;
    std::process::exit(exit_code);
}
