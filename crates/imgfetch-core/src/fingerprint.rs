//! Short URL fingerprints used to disambiguate colliding filenames.

use md5::{Digest, Md5};

/// Number of hex characters kept from the digest.
pub const FINGERPRINT_LEN: usize = 8;

/// MD5 of the URL string as lowercase hex, truncated to [`FINGERPRINT_LEN`].
pub fn url_fingerprint(url: &str) -> String {
    let digest = Md5::digest(url.as_bytes());
    let mut out = hex::encode(digest);
    out.truncate(FINGERPRINT_LEN);
    out
}
