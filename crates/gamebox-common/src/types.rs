//! Domain primitive types used across the gamebox workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a container instance, assigned by the external
/// runtime. Opaque to this tool; stored whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(String);

impl ContainerId {
    /// Creates a container ID from a string value, trimming surrounding
    /// whitespace.
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the identifier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hex digest identifying a built container image, stored without the
/// `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(String);

impl ImageId {
    /// Creates an image ID from a bare hex digest.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates an image ID from a digest string, stripping a leading
    /// `sha256:` prefix when present.
    #[must_use]
    pub fn from_digest(digest: &str) -> Self {
        let digest = digest.trim();
        let hex = digest.strip_prefix("sha256:").unwrap_or(digest);
        Self(hex.to_string())
    }

    /// Returns the inner hex digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
