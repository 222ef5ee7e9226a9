//! Docker-compatible CLI runtime wrapper.
//!
//! Assembles argument vectors for the external runtime binary and maps
//! exit codes onto the domain error taxonomy. Works against any tool that
//! honours the docker CLI contract (`build`/`run`/`exec`/`kill`).

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use gamebox_common::config::Timeouts;
use gamebox_common::error::{GameboxError, Result};
use gamebox_common::types::{ContainerId, ImageId};

use super::ContainerRuntime;
use crate::image;
use crate::runner;

/// Production runtime implementation wrapping a docker-compatible binary.
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: PathBuf,
    timeouts: Timeouts,
}

impl DockerCli {
    /// Creates a wrapper around an already-resolved runtime binary.
    #[must_use]
    pub const fn new(binary: PathBuf, timeouts: Timeouts) -> Self {
        Self { binary, timeouts }
    }

    /// Locates the runtime binary on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeUnavailable` when the binary cannot be found.
    pub fn locate(binary: &str, timeouts: Timeouts) -> Result<Self> {
        let resolved = which::which(binary).map_err(|e| GameboxError::RuntimeUnavailable {
            detail: format!("`{binary}` not found on PATH: {e}"),
        })?;
        tracing::debug!(binary = %resolved.display(), "runtime binary resolved");
        Ok(Self::new(resolved, timeouts))
    }

    /// Returns the resolved runtime binary path.
    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn command(&self) -> Command {
        Command::new(&self.binary)
    }

    fn build_command(&self, context: &Path, secret: Option<&str>) -> Command {
        let mut cmd = self.command();
        let _ = cmd.arg("build").arg(context);
        if let Some(secret) = secret {
            let _ = cmd.args(["--secret", secret]);
        }
        cmd
    }
}

impl ContainerRuntime for DockerCli {
    fn probe(&self) -> Result<()> {
        let timeout = Duration::from_secs(self.timeouts.probe_secs);
        let output = runner::run_captured(&mut self.command(), "probe", timeout)?;

        if output.success() {
            Ok(())
        } else {
            Err(GameboxError::RuntimeUnavailable {
                detail: output.diagnostic().to_string(),
            })
        }
    }

    fn build_tagged(&self, context: &Path, tag: &str, secret: Option<&str>) -> Result<()> {
        tracing::info!(context = %context.display(), tag, "building image");
        let mut cmd = self.build_command(context, secret);
        let _ = cmd.args(["-t", tag]);

        let timeout = Duration::from_secs(self.timeouts.build_secs);
        let exit_code = runner::run_streamed(&mut cmd, "build", timeout)?;
        if exit_code == 0 {
            Ok(())
        } else {
            Err(GameboxError::BuildFailed {
                detail: format!("runtime exited with status {exit_code}"),
            })
        }
    }

    fn build_untagged(&self, context: &Path, secret: Option<&str>) -> Result<ImageId> {
        tracing::info!(context = %context.display(), "building untagged image");

        let metadata = tempfile::Builder::new()
            .prefix("gamebox-build-")
            .suffix(".json")
            .tempfile()
            .map_err(|e| GameboxError::Io {
                path: std::env::temp_dir(),
                source: e,
            })?;

        let mut cmd = self.build_command(context, secret);
        let _ = cmd.arg("--metadata-file").arg(metadata.path());

        let timeout = Duration::from_secs(self.timeouts.build_secs);
        let output = runner::run_captured(&mut cmd, "build", timeout)?;
        if !output.success() {
            return Err(GameboxError::BuildFailed {
                detail: output.diagnostic().to_string(),
            });
        }

        if let Ok(document) = std::fs::read_to_string(metadata.path()) {
            if let Some(id) = image::from_metadata_json(&document) {
                return Ok(id);
            }
        }

        // Exporter phrasing fallback; see image.rs.
        let combined = format!("{}{}", output.stdout, output.stderr);
        image::from_build_output(&combined)
    }

    fn run_detached(
        &self,
        image: &str,
        host_dir: &Path,
        container_dir: &str,
    ) -> Result<ContainerId> {
        tracing::info!(image, host = %host_dir.display(), container = container_dir, "starting container");
        let mount = format!("{}:{container_dir}", host_dir.display());
        let mut cmd = self.command();
        let _ = cmd.args(["run", "-v", &mount, "-d", "-t", image]);

        let timeout = Duration::from_secs(self.timeouts.run_secs);
        let output = runner::run_captured(&mut cmd, "run", timeout)?;
        if !output.success() {
            return Err(GameboxError::StartFailed {
                detail: output.diagnostic().to_string(),
            });
        }

        let id = ContainerId::new(&output.stdout);
        if id.is_empty() {
            return Err(GameboxError::StartFailed {
                detail: "runtime reported no container identifier".to_string(),
            });
        }
        Ok(id)
    }

    fn attach_shell(&self, id: &ContainerId, shell: &str) -> Result<i32> {
        tracing::info!(container = %id, shell, "attaching shell");
        let mut cmd = self.command();
        let _ = cmd.args(["exec", "-i", "-t", id.as_str(), shell]);
        runner::run_interactive(&mut cmd)
    }

    fn kill(&self, id: &ContainerId) -> Result<()> {
        tracing::info!(container = %id, "killing container");
        let mut cmd = self.command();
        let _ = cmd.args(["kill", id.as_str()]);

        let timeout = Duration::from_secs(self.timeouts.kill_secs);
        let output = runner::run_captured(&mut cmd, "kill", timeout)?;
        if output.success() {
            Ok(())
        } else {
            Err(GameboxError::StopFailed {
                detail: output.diagnostic().to_string(),
            })
        }
    }
}
