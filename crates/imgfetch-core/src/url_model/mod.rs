//! URL modeling and filename derivation.
//!
//! Derives the local filename for a fetched image from the URL path, falling
//! back to a fixed name and disambiguating against names already on disk.

mod extension;
mod path;

use std::collections::HashSet;

use crate::fingerprint::url_fingerprint;

pub use extension::split_extension;
pub use path::final_path_segment;

/// Filename used when the URL path has no final segment.
pub const DEFAULT_FILENAME: &str = "downloaded_image.jpg";

/// Resolves the filename to save `url` under, given the names already present
/// in the destination directory.
///
/// Uses the final URL path segment, or [`DEFAULT_FILENAME`] when there is none.
/// If that name is taken, the URL fingerprint is inserted before the extension
/// (`{stem}_{fingerprint}{ext}`). The disambiguated name is not checked again.
///
/// # Examples
///
/// - `resolve_filename("http://x.com/a.jpg", &{})` → `"a.jpg"`
/// - `resolve_filename("http://x.com/a.jpg", &{"a.jpg"})` → `"a_050b9227.jpg"`
/// - `resolve_filename("http://x.com/", &{})` → `"downloaded_image.jpg"`
pub fn resolve_filename(url: &str, existing: &HashSet<String>) -> String {
    let candidate = final_path_segment(url).unwrap_or_else(|| DEFAULT_FILENAME.to_string());

    if !existing.contains(&candidate) {
        return candidate;
    }

    let (stem, ext) = split_extension(&candidate);
    format!("{}_{}{}", stem, url_fingerprint(url), ext)
}
