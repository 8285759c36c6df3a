//! Single-URL image fetch.
//!
//! Issues one blocking GET through libcurl (`curl` crate), checks the status
//! and declared Content-Type, then saves the body into the destination folder
//! under a collision-safe name.

mod error;
mod parse;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::ImgfetchConfig;
use crate::storage;
use crate::url_model::resolve_filename;

pub use error::{FetchError, FetchErrorKind};
pub use parse::{is_image_content_type, ResponseHead};

/// User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "UbuntuImageFetcher/1.0";

/// Total request/response timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Request settings for [`fetch_image`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub user_agent: String,
    /// Covers the whole transfer, connect included.
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FetchOptions {
    pub fn from_config(cfg: &ImgfetchConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            timeout: cfg.timeout(),
        }
    }
}

/// A saved image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// Name within the destination folder.
    pub filename: String,
    /// `folder/filename`.
    pub path: PathBuf,
}

/// Raw outcome of a completed transfer.
struct Response {
    status: u32,
    head: ResponseHead,
    body: Vec<u8>,
}

/// Downloads `url` and saves it into `folder` if the server declares an image.
///
/// Creates `folder` (and parents) first. The destination listing is read after
/// the response is validated and used for one collision check; the body is
/// written in a single call.
pub fn fetch_image(url: &str, folder: &Path, opts: &FetchOptions) -> Result<Fetched, FetchError> {
    storage::ensure_dir(folder)?;

    tracing::debug!(url, "GET");
    let response = get(url, opts)?;
    tracing::debug!(
        url,
        status = response.status,
        content_type = ?response.head.content_type,
        bytes = response.body.len(),
        "response received"
    );

    if !(200..300).contains(&response.status) {
        tracing::warn!(url, status = response.status, "non-success status");
        return Err(FetchError::Http {
            status: response.status,
        });
    }

    let content_type = response.head.content_type.unwrap_or_default();
    if !is_image_content_type(&content_type) {
        tracing::info!(url, %content_type, "skipping non-image response");
        return Err(FetchError::NotAnImage { content_type });
    }

    if let Some(expected) = response.head.content_length {
        if expected != response.body.len() as u64 {
            tracing::warn!(
                url,
                expected,
                received = response.body.len(),
                "body length differs from Content-Length"
            );
        }
    }

    let existing = storage::existing_filenames(folder)?;
    let filename = resolve_filename(url, &existing);
    let path = folder.join(&filename);
    storage::write_file(&path, &response.body)?;

    tracing::info!(url, path = %path.display(), bytes = response.body.len(), "image saved");
    Ok(Fetched { filename, path })
}

/// Performs the GET and buffers headers and body in memory.
fn get(url: &str, opts: &FetchOptions) -> Result<Response, curl::Error> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(30)?;
    easy.useragent(&opts.user_agent)?;
    easy.timeout(opts.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            header_lines.push(parse::header_line(data));
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(Response {
        status,
        head: parse::parse_headers(&header_lines),
        body,
    })
}
