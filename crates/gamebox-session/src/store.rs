//! Durable storage for the current session identity.
//!
//! The lockfile is the only state this tool holds between invocations: a
//! single file containing exactly the trimmed container identifier. If it
//! exists and is non-empty, it is assumed (not verified) to name a running
//! container; a stale identifier surfaces as a runtime error when used.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use gamebox_common::error::{GameboxError, Result};
use gamebox_common::types::ContainerId;

/// Single-slot store mapping "current session" to a container identifier.
///
/// Injected into the session manager so tests can substitute an in-memory
/// implementation for the on-disk lockfile.
pub trait SessionStore: Send + Sync {
    /// Reads the recorded identity. Absent or empty records are `None`,
    /// distinctly from a found identifier.
    ///
    /// # Errors
    ///
    /// Returns `Lockfile` on any I/O failure other than absence.
    fn load(&self) -> Result<Option<ContainerId>>;

    /// Records an identity, overwriting any prior record.
    ///
    /// # Errors
    ///
    /// Returns `Lockfile` if the record cannot be written.
    fn save(&self, id: &ContainerId) -> Result<()>;

    /// Deletes the record. Deleting an absent record is a success.
    ///
    /// # Errors
    ///
    /// Returns `Lockfile` on any I/O failure other than absence.
    fn clear(&self) -> Result<()>;
}

/// Lockfile-backed store, the production implementation.
///
/// Writes go to a temporary file in the lockfile's directory and are
/// renamed into place, so a concurrent reader never observes a torn
/// record. Concurrent invocations of the tool itself remain unsupported.
#[derive(Debug, Clone)]
pub struct LockfileStore {
    path: PathBuf,
}

impl LockfileStore {
    /// Creates a store backed by the given lockfile path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the lockfile path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> GameboxError {
        GameboxError::Lockfile {
            path: self.path.clone(),
            source,
        }
    }
}

impl SessionStore for LockfileStore {
    fn load(&self) -> Result<Option<ContainerId>> {
        tracing::debug!(path = %self.path.display(), "reading lockfile");
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let id = ContainerId::new(content);
                if id.is_empty() { Ok(None) } else { Ok(Some(id)) }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&self, id: &ContainerId) -> Result<()> {
        tracing::debug!(path = %self.path.display(), container = %id, "writing lockfile");
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));

        let mut file = tempfile::NamedTempFile::new_in(parent).map_err(|e| self.io_error(e))?;
        file.write_all(id.as_str().as_bytes())
            .map_err(|e| self.io_error(e))?;
        let _ = file.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        tracing::debug!(path = %self.path.display(), "deleting lockfile");
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// In-memory store for tests and embedding callers.
///
/// Clones share the same slot, so a test can keep a handle while the
/// session manager owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<ContainerId>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<ContainerId>> {
        self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<ContainerId>> {
        Ok(self.lock().clone())
    }

    fn save(&self, id: &ContainerId) -> Result<()> {
        *self.lock() = Some(id.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock() = None;
        Ok(())
    }
}
