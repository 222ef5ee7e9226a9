//! CLI command definitions and dispatch.

pub mod build;
pub mod shell;
pub mod start;
pub mod stop;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gamebox_common::config::SessionConfig;
use gamebox_common::error::GameboxError;

/// gamebox — dev-container manager for the game-server project.
#[derive(Parser, Debug)]
#[command(name = "gbx", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Project root: build context, bind-mount source, and lockfile parent.
    #[arg(long, global = true, default_value = ".")]
    pub project: PathBuf,

    /// Image tag to build and run.
    #[arg(long, global = true)]
    pub image: Option<String>,

    /// Container runtime binary to invoke.
    #[arg(long, global = true, default_value = gamebox_common::constants::DEFAULT_RUNTIME_BINARY)]
    pub runtime: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the dev-container image from the project directory.
    Build(build::BuildArgs),
    /// Start a detached dev container and record its identity.
    Start,
    /// Open an interactive shell inside the dev container (starting one
    /// if none is recorded).
    Shell,
    /// Kill the dev container; --force always discards the recorded
    /// identity.
    Stop(stop::StopArgs),
}

/// Builds the session configuration from the global flags.
fn session_config(cli: &Cli) -> SessionConfig {
    let mut config = SessionConfig::for_project(cli.project.clone());
    if let Some(image) = &cli.image {
        config.image_tag = image.clone();
    }
    config.runtime_binary = cli.runtime.clone();
    config
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = session_config(&cli);
    match cli.command {
        Command::Build(args) => build::execute(args, config),
        Command::Start => start::execute(config),
        Command::Shell => shell::execute(config),
        Command::Stop(args) => stop::execute(args, config),
    }
}

/// Maps an error onto the deterministic process exit code.
#[must_use]
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<GameboxError>() {
        Some(GameboxError::RuntimeUnavailable { .. }) => 10,
        Some(GameboxError::BuildFailed { .. }) => 11,
        Some(GameboxError::ImageIdNotFound { .. }) => 12,
        Some(GameboxError::StartFailed { .. }) => 13,
        Some(GameboxError::StopFailed { .. }) => 14,
        Some(GameboxError::Lockfile { .. }) => 15,
        Some(GameboxError::Timeout { .. }) => 16,
        Some(GameboxError::Io { .. }) => 17,
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_stop_with_force() {
        let cli = Cli::try_parse_from(["gbx", "stop", "--force"]).expect("parse");
        assert!(matches!(cli.command, Command::Stop(stop::StopArgs { force: true })));
    }

    #[test]
    fn cli_global_flags_reach_the_config() {
        let cli = Cli::try_parse_from([
            "gbx", "start", "--project", "/srv/game", "--image", "custom/tag", "--runtime",
            "podman",
        ])
        .expect("parse");
        let config = session_config(&cli);
        assert_eq!(config.project_dir, PathBuf::from("/srv/game"));
        assert_eq!(config.lockfile, PathBuf::from("/srv/game/.gamebox"));
        assert_eq!(config.image_tag, "custom/tag");
        assert_eq!(config.runtime_binary, "podman");
    }

    #[test]
    fn every_error_variant_maps_to_a_distinct_code() {
        let errors = [
            GameboxError::RuntimeUnavailable { detail: String::new() },
            GameboxError::BuildFailed { detail: String::new() },
            GameboxError::ImageIdNotFound { output: String::new() },
            GameboxError::StartFailed { detail: String::new() },
            GameboxError::StopFailed { detail: String::new() },
            GameboxError::Lockfile {
                path: PathBuf::new(),
                source: std::io::Error::other("x"),
            },
            GameboxError::Timeout { operation: "probe", seconds: 1 },
            GameboxError::Io {
                path: PathBuf::new(),
                source: std::io::Error::other("x"),
            },
        ];

        let mut codes: Vec<i32> = errors
            .into_iter()
            .map(|e| exit_code(&anyhow::Error::new(e)))
            .collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 8);
        assert!(codes.iter().all(|&c| c != 0));
    }

    #[test]
    fn unknown_errors_map_to_one() {
        assert_eq!(exit_code(&anyhow::anyhow!("something else")), 1);
    }
}
