//! Filename extraction from URL path.

/// Returns the text after the final `/` of the URL path, exactly as typed.
///
/// Query and fragment are cut off first, then a `scheme://authority` (or
/// `//authority`) prefix. Inputs without a scheme are treated as a bare path,
/// so `example.com/cat.jpg` still yields `cat.jpg`. No percent-decoding or
/// re-encoding is applied.
///
/// Returns `None` when the final segment is empty (bare host, trailing slash)
/// or a dot segment.
pub fn final_path_segment(url: &str) -> Option<String> {
    let end = url.find(|c| c == '?' || c == '#').unwrap_or(url.len());
    let path = url_path(&url[..end]);
    let segment = path.rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Path part of a URL with query and fragment already removed.
fn url_path(url: &str) -> &str {
    if let Some(i) = url.find("://") {
        after_authority(&url[i + 3..])
    } else if let Some(rest) = url.strip_prefix("//") {
        after_authority(rest)
    } else {
        url
    }
}

/// Drops the authority, keeping the path from its first `/`.
fn after_authority(rest: &str) -> &str {
    rest.find('/').map_or("", |i| &rest[i..])
}
