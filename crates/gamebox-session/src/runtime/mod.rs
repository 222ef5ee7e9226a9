//! Container runtime abstraction.
//!
//! The session manager speaks to the external runtime only through this
//! trait, so lifecycle scenarios are testable with a recording fake and
//! the production implementation stays a thin command-line wrapper.

pub mod docker;

use std::path::Path;

use gamebox_common::error::Result;
use gamebox_common::types::{ContainerId, ImageId};

/// Lifecycle verbs consumed from the external container runtime.
pub trait ContainerRuntime: Send + Sync {
    /// Verifies the runtime responds to a no-argument invocation.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeUnavailable` carrying the runtime's diagnostic
    /// text when the probe fails.
    fn probe(&self) -> Result<()>;

    /// Builds an image from `context` and tags it with `tag`. Success is
    /// determined by the runtime's exit code alone.
    ///
    /// # Errors
    ///
    /// Returns `BuildFailed` on a non-zero exit.
    fn build_tagged(&self, context: &Path, tag: &str, secret: Option<&str>) -> Result<()>;

    /// Builds an untagged image from `context` and recovers the written
    /// image's identifier.
    ///
    /// # Errors
    ///
    /// Returns `BuildFailed` on a non-zero exit, or `ImageIdNotFound`
    /// when the build succeeded but no identifier could be recovered.
    fn build_untagged(&self, context: &Path, secret: Option<&str>) -> Result<ImageId>;

    /// Starts a detached container from `image`, bind-mounting `host_dir`
    /// at `container_dir`, and returns the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns `StartFailed` on a non-zero exit or when the runtime
    /// reports no identifier.
    fn run_detached(&self, image: &str, host_dir: &Path, container_dir: &str)
    -> Result<ContainerId>;

    /// Attaches an interactive shell to the container, wiring the calling
    /// process's standard streams through, and returns the remote shell's
    /// exit code. Blocks for the whole remote session.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the runtime binary cannot be executed.
    fn attach_shell(&self, id: &ContainerId, shell: &str) -> Result<i32>;

    /// Kills the container.
    ///
    /// # Errors
    ///
    /// Returns `StopFailed` on a non-zero exit.
    fn kill(&self, id: &ContainerId) -> Result<()>;
}
