//! Session lifecycle state machine.
//!
//! Tracks at most one running development container through the injected
//! store:
//!
//! ```text
//! [NoSession] --build+start--> [Running] --stop--> [NoSession]
//! [NoSession] --shell (auto-start)--> [Running]
//! [Running]   --shell--> [Running]   (may fail if the identifier is stale)
//! ```
//!
//! Every public operation probes the runtime exactly once on entry;
//! internal helpers never re-probe, so there is no hidden memoization and
//! no double probing across a compound operation like the self-starting
//! shell.

use gamebox_common::config::SessionConfig;
use gamebox_common::error::{GameboxError, Result};
use gamebox_common::types::{ContainerId, ImageId};

use crate::runtime::ContainerRuntime;
use crate::runtime::docker::DockerCli;
use crate::store::{LockfileStore, SessionStore};

/// Drives the lifecycle of the project's single development container.
pub struct SessionManager {
    runtime: Box<dyn ContainerRuntime>,
    store: Box<dyn SessionStore>,
    config: SessionConfig,
}

impl SessionManager {
    /// Creates a manager from explicit collaborators.
    #[must_use]
    pub fn new(
        runtime: Box<dyn ContainerRuntime>,
        store: Box<dyn SessionStore>,
        config: SessionConfig,
    ) -> Self {
        Self {
            runtime,
            store,
            config,
        }
    }

    /// Creates a manager wired to the configured docker-compatible binary
    /// and the configured lockfile.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeUnavailable` when the runtime binary cannot be
    /// found on `PATH`.
    pub fn with_docker(config: SessionConfig) -> Result<Self> {
        let runtime = DockerCli::locate(&config.runtime_binary, config.timeouts)?;
        let store = LockfileStore::new(config.lockfile.clone());
        Ok(Self::new(Box::new(runtime), Box::new(store), config))
    }

    /// Builds the container image from the project directory.
    ///
    /// Under the default tagged policy the image gets the configured tag
    /// and `None` is returned; with `untagged` the recovered image
    /// identifier is returned instead.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeUnavailable`, `BuildFailed`, `ImageIdNotFound`,
    /// or `Timeout`.
    pub fn build(&self, untagged: bool) -> Result<Option<ImageId>> {
        self.runtime.probe()?;

        let secret = self.config.build_secret.as_deref();
        if untagged {
            let id = self.runtime.build_untagged(&self.config.project_dir, secret)?;
            tracing::info!(image = %id, "image built");
            Ok(Some(id))
        } else {
            self.runtime
                .build_tagged(&self.config.project_dir, &self.config.image_tag, secret)?;
            tracing::info!(tag = %self.config.image_tag, "image built");
            Ok(None)
        }
    }

    /// Starts a detached container from the configured image and records
    /// its identity in the store.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeUnavailable`, `StartFailed`, or `Timeout`. A
    /// failure to record a successfully started container surfaces as
    /// `StartFailed` naming the orphaned identifier — the container keeps
    /// running but is no longer tracked.
    pub fn start(&self) -> Result<ContainerId> {
        self.runtime.probe()?;
        self.launch()
    }

    /// Attaches an interactive shell to the running container, starting
    /// one first when no session is recorded. Returns the remote shell's
    /// exit code.
    ///
    /// A stale recorded identifier is not detected here; the runtime's
    /// own error surfaces through the exec's exit code.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeUnavailable`, `Lockfile`, `StartFailed`, or `Io`.
    pub fn shell(&self) -> Result<i32> {
        self.runtime.probe()?;

        let id = match self.store.load()? {
            Some(id) => id,
            None => {
                tracing::info!("no session recorded, starting one");
                self.launch()?
            }
        };

        self.runtime.attach_shell(&id, &self.config.shell)
    }

    /// Kills the recorded container. The record is cleared when the kill
    /// succeeds; with `force` it is cleared regardless of the kill
    /// outcome, so a stale identifier can always be discarded.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeUnavailable`, `StopFailed` (also when no session
    /// is recorded), `Lockfile`, or `Timeout`.
    pub fn stop(&self, force: bool) -> Result<()> {
        self.runtime.probe()?;

        let Some(id) = self.store.load()? else {
            return Err(GameboxError::StopFailed {
                detail: "no active session recorded".to_string(),
            });
        };

        let outcome = self.runtime.kill(&id);
        if force || outcome.is_ok() {
            self.store.clear()?;
            tracing::info!(container = %id, "session record cleared");
        }
        outcome
    }

    /// Runs the container and persists the assigned identity. Callers
    /// must have probed already.
    fn launch(&self) -> Result<ContainerId> {
        let id = self.runtime.run_detached(
            &self.config.image_tag,
            &self.config.project_dir,
            &self.config.container_workdir,
        )?;
        tracing::info!(container = %id, "container started");

        if let Err(error) = self.store.save(&id) {
            return Err(GameboxError::StartFailed {
                detail: format!(
                    "container {id} is running but its identity could not be recorded \
                     (stop it manually with the runtime tool): {error}"
                ),
            });
        }
        Ok(id)
    }
}
