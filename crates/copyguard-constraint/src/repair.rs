//! Deterministic repair: fix selection and phrase removal

use crate::compiled::{compile, word_pattern};
use copyguard_core::{FixAction, PrimaryFix, RepairResult, Warning};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

const REPEATABLE_PUNCTUATION: &[char] = &[',', '.', ';', ':', '!', '?'];

/// Remove each phrase from `text`, then tidy the whitespace and punctuation left behind.
///
/// For every non-blank phrase the removal forms are tried in order: with its
/// leading comma, with its trailing comma, then on its own. The first form
/// that changes the text wins and is recorded in `changes`.
pub fn remove_phrases_from_text<S: AsRef<str>>(text: &str, phrases: &[S]) -> RepairResult {
    let mut current = text.to_string();
    let mut changes = Vec::new();

    for phrase in phrases {
        let phrase = phrase.as_ref().trim();
        if phrase.is_empty() {
            continue;
        }

        let bounded = word_pattern(phrase);
        let forms = [
            format!(r",\s*{}", bounded),
            format!(r"{},\s*", bounded),
            bounded,
        ];

        for form in &forms {
            let Some(re) = compile(form) else {
                continue;
            };
            let replaced = re.replace_all(&current, "");
            if replaced != current {
                current = replaced.into_owned();
                debug!(phrase, pattern = form.as_str(), "removed phrase");
                changes.push(format!("Removed \"{}\"", phrase));
                break;
            }
        }
    }

    RepairResult {
        text: tidy(&current),
        success: !changes.is_empty(),
        changes,
    }
}

/// The one fix pass to run next, with every warning it resolves
pub fn get_primary_fix_action(warnings: &[Warning]) -> Option<PrimaryFix> {
    let top = warnings
        .iter()
        .min_by_key(|w| (w.severity.rank(), w.action.priority()))?;

    let action = top.action;
    Some(PrimaryFix {
        action,
        warnings: warnings
            .iter()
            .filter(|w| w.action == action)
            .cloned()
            .collect(),
    })
}

/// Phrases named by `remove_phrase` warnings, deduplicated in first-seen order
pub fn collect_phrases_to_remove(warnings: &[Warning]) -> Vec<String> {
    let removable: Vec<&Warning> = warnings
        .iter()
        .filter(|w| w.action == FixAction::RemovePhrase)
        .collect();

    let mut phrases: Vec<String> = Vec::new();
    let mut add = |phrase: &str| {
        if !phrase.trim().is_empty() && !phrases.iter().any(|p| p == phrase) {
            phrases.push(phrase.to_string());
        }
    };

    for warning in &removable {
        if let Some(listed) = warning.meta.as_ref().and_then(|m| m.phrases.as_ref()) {
            listed.iter().for_each(|p| add(p.as_str()));
        }
    }
    for warning in &removable {
        if let Some(matched) = &warning.matched_phrase {
            add(matched.as_str());
        }
    }

    phrases
}

/// Repair `text` in place when its primary fix is phrase removal.
///
/// Returns `None` for any other action; those need a rewrite or a fresh
/// generation, which is the caller's job.
pub fn repair_variant(text: &str, warnings: &[Warning]) -> Option<RepairResult> {
    let primary = get_primary_fix_action(warnings)?;
    if primary.action != FixAction::RemovePhrase {
        debug!(action = primary.action.as_str(), "primary fix is not deterministic");
        return None;
    }
    let phrases = collect_phrases_to_remove(&primary.warnings);
    Some(remove_phrases_from_text(text, &phrases))
}

fn tidy_rules() -> &'static [(Regex, &'static str)] {
    static CELL: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    CELL.get_or_init(|| {
        [
            (r"[ \t]{2,}", " "),
            (r"\s+([,.;:!?])", "$1"),
            (r",(?:\s*,)+", ","),
            (r",\s*([.;:!?])", "$1"),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| compile(pattern).map(|re| (re, replacement)))
        .collect()
    })
}

fn tidy(text: &str) -> String {
    let mut out = text.to_string();
    for (re, replacement) in tidy_rules() {
        out = re.replace_all(&out, *replacement).into_owned();
    }
    out = collapse_repeated_punctuation(&out);

    let out = out
        .trim_start_matches(|c: char| c == ',' || c == ';' || c == ':' || c.is_whitespace())
        .trim_end_matches(|c: char| c == ',' || c.is_whitespace());
    capitalize_first(out)
}

fn collapse_repeated_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous: Option<char> = None;
    for c in text.chars() {
        if previous == Some(c) && REPEATABLE_PUNCTUATION.contains(&c) {
            continue;
        }
        out.push(c);
        previous = Some(c);
    }
    out
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copyguard_core::{Severity, WarningMeta, WarningType};

    fn banned(index: usize, phrase: &str) -> Warning {
        Warning::new(index, WarningType::BannedPhrase, format!("banned {}", phrase))
            .with_matched_phrase(phrase)
            .with_meta(WarningMeta::phrases(vec![phrase.to_string()]))
    }

    #[test]
    fn test_remove_two_phrases() {
        let result = remove_phrases_from_text(
            "We offer a seamless, world-class experience.",
            &["seamless", "world-class"],
        );
        assert!(result.success);
        assert_eq!(result.text, "We offer a experience.");
        assert_eq!(
            result.changes,
            vec!["Removed \"seamless\"".to_string(), "Removed \"world-class\"".to_string()]
        );
    }

    #[test]
    fn test_remove_with_leading_comma() {
        let result = remove_phrases_from_text("Fast, friendly, cheap service.", &["cheap"]);
        assert_eq!(result.text, "Fast, friendly service.");
    }

    #[test]
    fn test_remove_at_start_capitalizes() {
        let result = remove_phrases_from_text("Synergy, fresh bread every morning.", &["synergy"]);
        assert_eq!(result.text, "Fresh bread every morning.");
        assert!(result.success);
    }

    #[test]
    fn test_remove_is_case_insensitive_and_global() {
        let result = remove_phrases_from_text("Cheap cuts and cheap thrills", &["CHEAP"]);
        assert_eq!(result.text, "Cuts and thrills");
        assert_eq!(result.changes.len(), 1);
    }

    #[test]
    fn test_remove_respects_word_boundaries() {
        let result = remove_phrases_from_text("Apply the app today.", &["app"]);
        assert_eq!(result.text, "Apply the today.");
    }

    #[test]
    fn test_no_phrases_is_not_a_success() {
        let result = remove_phrases_from_text::<&str>("Fresh bread daily.", &[]);
        assert!(!result.success);
        assert!(result.changes.is_empty());
        assert_eq!(result.text, "Fresh bread daily.");
    }

    #[test]
    fn test_absent_and_blank_phrases_record_nothing() {
        let result = remove_phrases_from_text("Fresh bread daily.", &["  ", "synergy"]);
        assert!(!result.success);
        assert!(result.changes.is_empty());
    }

    #[test]
    fn test_tidy_punctuation() {
        assert_eq!(tidy("hello ,  world !!"), "Hello, world!");
        assert_eq!(tidy(", leading comma,"), "Leading comma");
        assert_eq!(tidy("one, , two,."), "One, two.");
    }

    #[test]
    fn test_primary_fix_none_for_empty() {
        assert!(get_primary_fix_action(&[]).is_none());
    }

    #[test]
    fn test_primary_fix_errors_first() {
        let warnings = vec![
            banned(0, "synergy"),
            Warning::new(0, WarningType::QualityPlaceholder, "placeholder"),
            Warning::new(0, WarningType::QualityTooShort, "short"),
        ];
        let fix = get_primary_fix_action(&warnings).unwrap();
        assert_eq!(fix.action, FixAction::RegenerateStricter);
        assert_eq!(fix.warnings.len(), 2);
        assert_eq!(fix.warnings[0].warning_type, WarningType::QualityPlaceholder);
        assert_eq!(fix.warnings[1].warning_type, WarningType::QualityTooShort);
    }

    #[test]
    fn test_primary_fix_cheapest_action_among_equals() {
        let warnings = vec![
            Warning::new(0, WarningType::GenericFluff, "fluff"),
            Warning::new(0, WarningType::InventedClaim, "claim"),
            banned(0, "synergy"),
        ];
        let fix = get_primary_fix_action(&warnings).unwrap();
        assert_eq!(fix.action, FixAction::RemovePhrase);
        assert_eq!(fix.warnings.len(), 1);
        assert!(fix.warnings.iter().all(|w| w.severity == Severity::Warning));
    }

    #[test]
    fn test_primary_fix_error_beats_cheaper_warning() {
        let warnings = vec![
            banned(0, "synergy"),
            Warning::new(0, WarningType::ConstraintViolation, "over budget"),
        ];
        let fix = get_primary_fix_action(&warnings).unwrap();
        assert_eq!(fix.action, FixAction::RewriteWithConstraints);
    }

    #[test]
    fn test_collect_phrases_dedup_in_order() {
        let mut with_extra = banned(0, "cheap");
        with_extra.meta = Some(WarningMeta::phrases(vec!["cheap".into(), "cheapest".into()]));
        let warnings = vec![
            banned(0, "synergy"),
            with_extra,
            Warning::new(0, WarningType::GenericFluff, "fluff").with_matched_phrase("seamless"),
            banned(1, "synergy"),
        ];
        assert_eq!(
            collect_phrases_to_remove(&warnings),
            vec!["synergy".to_string(), "cheap".to_string(), "cheapest".to_string()]
        );
    }

    #[test]
    fn test_collect_falls_back_to_matched_phrase() {
        let warning = Warning::new(0, WarningType::BannedPhrase, "banned").with_matched_phrase("cheap");
        assert_eq!(collect_phrases_to_remove(&[warning]), vec!["cheap".to_string()]);
    }

    #[test]
    fn test_repair_variant_removes_banned() {
        let result = repair_variant("Synergy at cheap prices.", &[banned(0, "cheap")]).unwrap();
        assert!(result.success);
        assert_eq!(result.text, "Synergy at prices.");
    }

    #[test]
    fn test_repair_variant_declines_non_deterministic_fix() {
        let warnings = vec![Warning::new(0, WarningType::InventedClaim, "claim")];
        assert!(repair_variant("Guaranteed results.", &warnings).is_none());
        assert!(repair_variant("Anything.", &[]).is_none());
    }
}
