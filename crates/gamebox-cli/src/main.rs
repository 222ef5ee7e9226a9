//! # gbx — gamebox CLI
//!
//! Dev-container manager for the game-server project. Wraps the local
//! container runtime to build the project image, start a container over
//! the working tree, shell into it, and stop it again.

mod commands;

use clap::Parser;

use crate::commands::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
        )
        .init();

    let cli = Cli::parse();
    if let Err(error) = commands::execute(cli) {
        eprintln!("{error:#}");
        std::process::exit(commands::exit_code(&error));
    }
}
