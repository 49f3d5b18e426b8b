//! Asset URL normalization and media helpers.
//!
//! The content API mixes absolute third-party URLs with storage-relative
//! paths, the latter sometimes carrying a stray leading slash.

use std::sync::OnceLock;

use regex::Regex;

/// Removes exactly one leading slash; anything else passes through.
pub fn strip_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Resolves an asset reference against the storage base URL. Absolute
/// URLs are kept verbatim, relative paths are joined after stripping the
/// leading slash.
pub fn resolve_asset(storage_base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            storage_base.trim_end_matches('/'),
            strip_leading_slash(path)
        )
    }
}

static VIDEO_ID_PATTERN: OnceLock<Regex> = OnceLock::new();

fn video_id_pattern() -> &'static Regex {
    VIDEO_ID_PATTERN.get_or_init(|| {
        Regex::new(r"(?:youtu\.be/|/v/|/embed/|/u/\w/|watch\?v=|&v=)([^#&?/]+)")
            .expect("video id pattern is valid")
    })
}

/// Extracts the 11-character video id from the usual YouTube URL shapes
/// (`watch?v=`, `youtu.be/`, `embed/`, `v/`). Anything else yields `None`.
pub fn extract_video_id(url: &str) -> Option<&str> {
    video_id_pattern()
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
        .filter(|id| id.len() == 11)
}
