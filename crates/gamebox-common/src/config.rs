//! Configuration model for a single CLI invocation.
//!
//! The CLI builds one [`SessionConfig`] per invocation and hands it to the
//! session manager. Nothing in here is cached across invocations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Per-operation deadlines for external runtime calls, in seconds.
///
/// The interactive shell attach deliberately has no deadline and is not
/// represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeouts {
    /// Deadline for the no-argument availability probe.
    pub probe_secs: u64,
    /// Deadline for an image build.
    pub build_secs: u64,
    /// Deadline for starting a detached container.
    pub run_secs: u64,
    /// Deadline for killing a running container.
    pub kill_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            probe_secs: constants::PROBE_TIMEOUT_SECS,
            build_secs: constants::BUILD_TIMEOUT_SECS,
            run_secs: constants::RUN_TIMEOUT_SECS,
            kill_secs: constants::KILL_TIMEOUT_SECS,
        }
    }
}

/// Root configuration for one session-manager invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Project root: build context, bind-mount source, and lockfile parent.
    pub project_dir: PathBuf,
    /// Path of the session lockfile.
    pub lockfile: PathBuf,
    /// Logical name the image is tagged with.
    pub image_tag: String,
    /// External container runtime binary name.
    pub runtime_binary: String,
    /// Mount point of the project directory inside the container.
    pub container_workdir: String,
    /// Shell executed inside the container by the shell command.
    pub shell: String,
    /// Build-time secret reference passed through to the runtime
    /// (`id=..,src=..`), for credentialed build steps.
    pub build_secret: Option<String>,
    /// Deadlines for external runtime calls.
    pub timeouts: Timeouts,
}

impl SessionConfig {
    /// Creates a configuration rooted at the given project directory,
    /// deriving the lockfile path from it.
    #[must_use]
    pub fn for_project(project_dir: PathBuf) -> Self {
        let lockfile = project_dir.join(constants::LOCKFILE_NAME);
        Self {
            project_dir,
            lockfile,
            image_tag: constants::DEFAULT_IMAGE_TAG.to_string(),
            runtime_binary: constants::DEFAULT_RUNTIME_BINARY.to_string(),
            container_workdir: constants::CONTAINER_WORKDIR.to_string(),
            shell: constants::CONTAINER_SHELL.to_string(),
            build_secret: None,
            timeouts: Timeouts::default(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::for_project(PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_project_derives_lockfile_path() {
        let config = SessionConfig::for_project(PathBuf::from("/srv/game"));
        assert_eq!(config.lockfile, PathBuf::from("/srv/game/.gamebox"));
    }

    #[test]
    fn default_uses_docker_and_fixed_tag() {
        let config = SessionConfig::default();
        assert_eq!(config.runtime_binary, "docker");
        assert_eq!(config.image_tag, "gamebox/server");
    }
}
