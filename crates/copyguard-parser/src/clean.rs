//! Cleanup applied to every raw match before it becomes a variant

use crate::pattern::cached;
use regex::Regex;
use std::sync::OnceLock;

static HEADING: OnceLock<Option<Regex>> = OnceLock::new();
static LABEL: OnceLock<Option<Regex>> = OnceLock::new();
static LEADING_MARKER: OnceLock<Option<Regex>> = OnceLock::new();

const QUOTE_PAIRS: [(char, char); 4] = [('"', '"'), ('\'', '\''), ('“', '”'), ('‘', '’')];

/// Strip presentation noise from one candidate: heading markers, a
/// `Variant N:` style label, a leading number or bullet, and one pair of
/// fully wrapping quotes.
pub fn clean_variant_text(raw: &str) -> String {
    let mut text = raw.trim().to_string();

    if let Some(re) = cached(&HEADING, r"^#{1,6}\s*") {
        text = re.replace(&text, "").into_owned();
    }

    if let Some(re) = cached(
        &LABEL,
        r"(?i)^\**\s*(?:variant|option|version)\s*#?\s*\d+\s*\**\s*[:)\-–—]\s*\**\s*",
    ) {
        text = re.replace(&text, "").into_owned();
    }

    if let Some(re) = cached(&LEADING_MARKER, r"^(?:\d+[.):]\s+|[-*•]\s+)") {
        text = re.replace(&text, "").into_owned();
    }

    strip_wrapping_quotes(text.trim()).trim().to_string()
}

fn strip_wrapping_quotes(text: &str) -> &str {
    let mut chars = text.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return text;
    };

    if QUOTE_PAIRS.iter().any(|&(open, close)| first == open && last == close) {
        &text[first.len_utf8()..text.len() - last.len_utf8()]
    } else {
        text
    }
}
