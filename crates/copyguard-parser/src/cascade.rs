//! Ordered strategy cascade

use crate::strategies::{parse_bullets, parse_fallback, parse_json, parse_numbered, parse_paragraphs};
use copyguard_core::{ParseMethod, ParsedVariants};
use tracing::{debug, trace};

type Strategy = fn(&str) -> Option<Vec<String>>;

/// Tried in order; the first strategy that yields text wins
const STRATEGIES: &[(ParseMethod, Strategy)] = &[
    (ParseMethod::Json, parse_json),
    (ParseMethod::Numbered, parse_numbered),
    (ParseMethod::Bullets, parse_bullets),
    (ParseMethod::Paragraphs, parse_paragraphs),
    (ParseMethod::Fallback, parse_fallback),
];

/// Split one raw generator output into candidate variants.
///
/// `expected_count` only truncates: when a strategy finds more variants the
/// first `expected_count` are kept, fewer are returned as-is. A count of 0
/// keeps everything. Never fails; blank input yields an empty fallback.
pub fn parse_variants_from_output(output: &str, expected_count: usize) -> ParsedVariants {
    for (method, strategy) in STRATEGIES {
        let Some(found) = strategy(output) else {
            trace!(method = method.as_str(), "strategy found nothing");
            continue;
        };

        let variants = normalize(found, expected_count);
        if variants.is_empty() {
            continue;
        }

        debug!(
            method = method.as_str(),
            count = variants.len(),
            expected = expected_count,
            "parsed variants"
        );
        return ParsedVariants {
            variants,
            parse_method: *method,
        };
    }

    ParsedVariants {
        variants: Vec::new(),
        parse_method: ParseMethod::Fallback,
    }
}

fn normalize(found: Vec<String>, expected_count: usize) -> Vec<String> {
    let mut variants: Vec<String> = found
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect();

    if expected_count > 0 && variants.len() > expected_count {
        variants.truncate(expected_count);
    }
    variants
}
