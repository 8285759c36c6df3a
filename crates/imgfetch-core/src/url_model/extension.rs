//! Stem / extension split for filenames.

/// Splits `name` into `(stem, extension)` where the extension includes the dot.
///
/// The extension starts at the last `.`; leading dots never start one, so
/// `.hidden` has no extension and `a.tar.gz` splits as `a.tar` + `.gz`.
pub fn split_extension(name: &str) -> (&str, &str) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(i) => name.split_at(leading + i),
        None => (name, ""),
    }
}
