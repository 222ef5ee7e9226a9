//! Image identifier recovery from build results.
//!
//! Untagged builds need the freshly written image's digest back. The
//! runtime's machine-readable metadata file is authoritative; scraping the
//! diagnostic stream for a `writing image sha256:...` line is the fallback
//! and is coupled to the runtime's exact phrasing, which is why both live
//! behind this narrow module instead of inline in the runtime wrapper.

use gamebox_common::error::{GameboxError, Result};
use gamebox_common::types::ImageId;

/// Marker line emitted by the runtime's exporter when an image is written.
const WRITING_IMAGE_MARKER: &str = "writing image sha256:";

/// Digest key inside the runtime's `--metadata-file` JSON document.
const METADATA_DIGEST_KEY: &str = "containerimage.digest";

/// Extracts the image digest from the runtime's build metadata file.
///
/// Returns `None` when the document is not JSON or carries no digest, so
/// the caller can fall back to output scraping.
#[must_use]
pub fn from_metadata_json(metadata: &str) -> Option<ImageId> {
    let value: serde_json::Value = serde_json::from_str(metadata).ok()?;
    let digest = value.get(METADATA_DIGEST_KEY)?.as_str()?;
    if digest.is_empty() {
        return None;
    }
    Some(ImageId::from_digest(digest))
}

/// Extracts the image digest from the runtime's diagnostic output.
///
/// Scans for the exporter's `writing image sha256:<hex>` line and returns
/// the hex digest without the prefix.
///
/// # Errors
///
/// Returns `ImageIdNotFound` carrying the searched output when no such
/// line is present.
pub fn from_build_output(output: &str) -> Result<ImageId> {
    for line in output.lines() {
        if let Some(position) = line.find(WRITING_IMAGE_MARKER) {
            let rest = &line[position + WRITING_IMAGE_MARKER.len()..];
            let hex: String = rest.chars().take_while(char::is_ascii_hexdigit).collect();
            if !hex.is_empty() {
                return Ok(ImageId::new(hex));
            }
        }
    }

    Err(GameboxError::ImageIdNotFound {
        output: output.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_output_yields_hex_digest() {
        let output = "#7 exporting layers\n#7 writing image sha256:deadbeef01\n#7 done";
        let id = from_build_output(output).expect("digest line is present");
        assert_eq!(id.as_str(), "deadbeef01");
    }

    #[test]
    fn build_output_digest_stops_at_non_hex() {
        let output = "#8 writing image sha256:deadbeef01 0.0s done";
        let id = from_build_output(output).expect("digest line is present");
        assert_eq!(id.as_str(), "deadbeef01");
    }

    #[test]
    fn build_output_without_marker_is_not_found() {
        let result = from_build_output("#7 exporting layers\n#7 done");
        assert!(matches!(result, Err(GameboxError::ImageIdNotFound { .. })));
    }

    #[test]
    fn build_output_with_empty_digest_is_not_found() {
        let result = from_build_output("writing image sha256: (none)");
        assert!(matches!(result, Err(GameboxError::ImageIdNotFound { .. })));
    }

    #[test]
    fn metadata_json_yields_digest() {
        let metadata = r#"{"containerimage.digest": "sha256:deadbeef01"}"#;
        let id = from_metadata_json(metadata).expect("digest key is present");
        assert_eq!(id.as_str(), "deadbeef01");
    }

    #[test]
    fn metadata_without_digest_key_is_none() {
        assert!(from_metadata_json(r#"{"containerimage.config.digest": "sha256:ff"}"#).is_none());
    }

    #[test]
    fn malformed_metadata_is_none() {
        assert!(from_metadata_json("not json at all").is_none());
    }
}
