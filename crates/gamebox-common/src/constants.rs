//! System-wide constants and default names.

/// Application name used in CLI output and diagnostics.
pub const APP_NAME: &str = "gamebox";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "gbx";

/// File name of the session lockfile, created inside the project directory.
pub const LOCKFILE_NAME: &str = ".gamebox";

/// Logical name the image is tagged with under the tagged-build policy.
pub const DEFAULT_IMAGE_TAG: &str = "gamebox/server";

/// External container runtime binary consulted by default.
pub const DEFAULT_RUNTIME_BINARY: &str = "docker";

/// Mount point of the project directory inside the container.
pub const CONTAINER_WORKDIR: &str = "/work";

/// Shell executed by `gbx shell` inside the container.
pub const CONTAINER_SHELL: &str = "bash";

/// Deadline for the no-argument availability probe.
pub const PROBE_TIMEOUT_SECS: u64 = 10;

/// Deadline for an image build. Game-server images pull a full client
/// installation, so this is generous.
pub const BUILD_TIMEOUT_SECS: u64 = 3600;

/// Deadline for starting a detached container.
pub const RUN_TIMEOUT_SECS: u64 = 60;

/// Deadline for killing a running container.
pub const KILL_TIMEOUT_SECS: u64 = 30;
