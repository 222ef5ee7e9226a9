//! `gbx build` — Build the dev-container image.

use clap::Args;
use gamebox_common::config::SessionConfig;
use gamebox_session::manager::SessionManager;

/// Arguments for the `build` command.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Build without a tag and print the recovered image identifier.
    #[arg(long)]
    pub untagged: bool,

    /// Build-time secret reference forwarded to the runtime
    /// (id=<name>,src=<path>), for credentialed install steps.
    #[arg(long)]
    pub secret: Option<String>,
}

/// Executes the `build` command.
///
/// # Errors
///
/// Returns an error if the runtime is unavailable or the build fails.
pub fn execute(args: BuildArgs, mut config: SessionConfig) -> anyhow::Result<()> {
    config.build_secret = args.secret;

    eprintln!("Warning: the image is at least the size of a full game-server installation.");
    tracing::info!(context = %config.project_dir.display(), "building image");

    let tag = config.image_tag.clone();
    let manager = SessionManager::with_docker(config)?;
    match manager.build(args.untagged)? {
        Some(image) => println!("{image}"),
        None => eprintln!("Image built and tagged as {tag}."),
    }
    Ok(())
}
