//! The interactive session: banner, one prompt, sequential fetches, sign-off.

use anyhow::{Context, Result};
use imgfetch_core::config::ImgfetchConfig;
use imgfetch_core::fetcher::FetchOptions;
use std::io::{BufRead, Write};

use super::fetch_and_report;

const BANNER: &str = "Welcome to the Ubuntu Image Fetcher\n\
                      A tool for mindfully collecting images from the web\n";
const PROMPT: &str = "Please enter one or more image URLs (separated by commas): ";
const CLOSING: &str = "\nConnection strengthened. Community enriched.";

/// Outcome counts for one session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Filenames saved, in input order.
    pub saved: Vec<String>,
    /// URLs that did not produce a file.
    pub failed: usize,
}

/// Splits one input line on commas, trimming entries and dropping empty ones.
pub fn parse_url_list(line: &str) -> Vec<&str> {
    line.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .collect()
}

/// Runs one session: prints the banner, reads one line of URLs from `input`
/// and fetches each in order into `cfg.folder`.
///
/// End of input counts as an empty list. Individual fetch failures are
/// reported and skipped; only console I/O errors end the session early.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    cfg: &ImgfetchConfig,
) -> Result<SessionSummary> {
    writeln!(out, "{}", BANNER).context("write banner")?;
    write!(out, "{}", PROMPT).context("write prompt")?;
    out.flush().context("flush prompt")?;

    let mut line = String::new();
    if input.read_line(&mut line).context("read URL list")? == 0 {
        writeln!(out).context("write newline")?;
    }

    let opts = FetchOptions::from_config(cfg);
    let urls = parse_url_list(&line);
    tracing::info!(count = urls.len(), folder = %cfg.folder.display(), "starting session");

    let mut summary = SessionSummary::default();
    for url in urls {
        match fetch_and_report(out, url, &cfg.folder, &opts).context("write status")? {
            Some(filename) => summary.saved.push(filename),
            None => summary.failed += 1,
        }
    }

    writeln!(out, "{}", CLOSING).context("write closing line")?;
    out.flush().context("flush output")?;
    Ok(summary)
}
