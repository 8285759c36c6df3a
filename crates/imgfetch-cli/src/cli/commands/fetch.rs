//! Fetch one URL and print its status lines.

use imgfetch_core::fetcher::{fetch_image, FetchError, FetchErrorKind, FetchOptions, Fetched};
use std::io::{self, Write};
use std::path::Path;

/// Fetches `url` into `folder` and reports the outcome on `out`.
///
/// Returns the saved filename, or `None` for any failure; fetch failures never
/// propagate. Only a failure to write the report itself is an error.
pub fn fetch_and_report<W: Write>(
    out: &mut W,
    url: &str,
    folder: &Path,
    opts: &FetchOptions,
) -> io::Result<Option<String>> {
    let result = fetch_image(url, folder, opts);
    if let Err(err) = &result {
        tracing::debug!(url, kind = ?err.kind(), "fetch failed: {}", err);
    }
    report_outcome(out, url, &result)?;
    Ok(result.ok().map(|fetched| fetched.filename))
}

/// Writes the human-readable status line(s) for one fetch.
pub fn report_outcome<W: Write>(
    out: &mut W,
    url: &str,
    result: &Result<Fetched, FetchError>,
) -> io::Result<()> {
    match result {
        Ok(fetched) => {
            writeln!(out, "✓ Successfully fetched: {}", fetched.filename)?;
            writeln!(out, "✓ Image saved to {}", fetched.path.display())
        }
        Err(err) => match err.kind() {
            FetchErrorKind::NotAnImage => writeln!(out, "✗ Skipped: {} (Not an image)", url),
            FetchErrorKind::Network => writeln!(out, "✗ Connection error for {}: {}", url, err),
            FetchErrorKind::Unexpected => writeln!(out, "✗ An error occurred for {}: {}", url, err),
        },
    }
}
