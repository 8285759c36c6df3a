//! Parse HTTP response header lines into ResponseHead.

/// Headers of the final response that the fetcher cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    /// Declared `Content-Type`, if present.
    pub content_type: Option<String>,
    /// `Content-Length`, if present and numeric.
    pub content_length: Option<u64>,
}

/// One raw header line from libcurl as text. Non-UTF-8 bytes (e.g. Latin-1
/// parameters) are replaced rather than dropping the whole line.
pub(crate) fn header_line(data: &[u8]) -> String {
    String::from_utf8_lossy(data).trim_end().to_string()
}

/// Parse collected header lines into ResponseHead.
///
/// libcurl reports the headers of every response in a redirect chain; a status
/// line (`HTTP/...`) starts a new block, so only the last block is kept.
pub(crate) fn parse_headers(lines: &[String]) -> ResponseHead {
    let mut head = ResponseHead::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            head = ResponseHead::default();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-type") {
                head.content_type = Some(value.to_string());
            }
            if name.eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.parse::<u64>() {
                    head.content_length = Some(n);
                }
            }
        }
    }

    head
}

/// True if the declared content type marks an image (`image/` prefix, case-sensitive).
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}
