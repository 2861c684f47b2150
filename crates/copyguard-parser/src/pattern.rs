//! Lazily compiled regexes

use regex::Regex;
use std::sync::OnceLock;

/// Compile `pattern` once into `cell`. A pattern that fails to compile is
/// logged and treated as never matching.
pub(crate) fn cached(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!(pattern, error = %e, "invalid parser pattern");
            None
        }
    })
    .as_ref()
}
