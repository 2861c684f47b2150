//! The ordered battery of per-variant checks

use crate::compiled::{
    compile, constraint_rules, cro_patterns, domain_indicators, drift_rules, engagement_patterns,
    fluff_phrases, invented_claims, mechanism_terms, word_pattern,
};
use crate::corpus::ContextCorpus;
use crate::patterns::{ConstraintRule, LimitSignal};
use crate::validator::ValidatorOptions;
use copyguard_core::{ContextSnapshot, GenerationContract, Warning, WarningMeta, WarningType};
use regex::Regex;
use std::sync::OnceLock;

const MIN_VARIANT_CHARS: usize = 10;
const WORD_LIMIT_TOLERANCE: f64 = 1.5;

/// Everything a check may look at besides the variant itself
pub(crate) struct CheckContext<'a> {
    pub contract: &'a GenerationContract,
    pub snapshot: &'a ContextSnapshot,
    pub corpus: &'a ContextCorpus,
    pub options: &'a ValidatorOptions,
}

pub(crate) type Check = fn(usize, &str, &CheckContext) -> Vec<Warning>;

/// Run order is fixed; every check runs regardless of earlier results
pub(crate) const CHECKS: &[(&str, Check)] = &[
    ("banned_phrase", check_banned_phrase),
    ("invented_claim", check_invented_claims),
    ("generic_fluff", check_generic_fluff),
    ("engagement_drift", check_engagement_drift),
    ("mechanism_drift", check_mechanism_drift),
    ("cro_drift", check_cro_drift),
    ("domain_mismatch", check_domain_mismatch),
    ("product_category_drift", check_product_category_drift),
    ("constraint_violation", check_constraint_violations),
    ("quality", check_quality),
];

fn check_banned_phrase(index: usize, text: &str, ctx: &CheckContext) -> Vec<Warning> {
    let lower = text.to_lowercase();
    let hit = ctx
        .contract
        .exclusions
        .iter()
        .map(|p| p.trim())
        .find(|p| !p.is_empty() && lower.contains(&p.to_lowercase()));

    match hit {
        Some(phrase) => vec![Warning::new(
            index,
            WarningType::BannedPhrase,
            format!("Contains banned phrase \"{}\"", phrase),
        )
        .with_matched_phrase(phrase)
        .with_meta(WarningMeta::phrases(vec![phrase.to_string()]))],
        None => Vec::new(),
    }
}

fn check_invented_claims(index: usize, text: &str, ctx: &CheckContext) -> Vec<Warning> {
    let mut phrases = Vec::new();
    let mut first: Option<(&str, &str)> = None;

    for compiled in invented_claims() {
        let entry = compiled.entry;
        let hit = compiled
            .regex
            .find_iter(text)
            .find(|m| !(entry.groundable && ctx.corpus.contains(m.as_str())));
        if let Some(m) = hit {
            first.get_or_insert((entry.pattern, entry.description));
            push_unique(&mut phrases, m.as_str());
        }
    }

    let Some((pattern, description)) = first else {
        return Vec::new();
    };
    vec![Warning::new(
        index,
        WarningType::InventedClaim,
        format!("Unsupported claim ({}): {}", description, quote_list(&phrases)),
    )
    .with_matched_phrase(phrases[0].clone())
    .with_meta(WarningMeta {
        phrases: Some(phrases),
        pattern: Some(pattern.to_string()),
        ..WarningMeta::default()
    })]
}

fn check_generic_fluff(index: usize, text: &str, ctx: &CheckContext) -> Vec<Warning> {
    let mut phrases = Vec::new();
    for compiled in fluff_phrases() {
        if let Some(m) = compiled.regex.find(text) {
            if !ctx.corpus.contains(compiled.entry) {
                push_unique(&mut phrases, m.as_str());
            }
        }
    }

    if phrases.is_empty() {
        return Vec::new();
    }
    vec![Warning::new(
        index,
        WarningType::GenericFluff,
        format!("Generic marketing filler not found in context: {}", quote_list(&phrases)),
    )
    .with_matched_phrase(phrases[0].clone())
    .with_meta(WarningMeta::phrases(phrases))]
}

fn check_engagement_drift(index: usize, text: &str, ctx: &CheckContext) -> Vec<Warning> {
    if !ctx.options.business_definition_missing || ctx.options.has_gap_business_summary {
        return Vec::new();
    }

    let hit = engagement_patterns()
        .iter()
        .find_map(|compiled| compiled.regex.find(text).map(|m| (m.as_str(), *compiled.entry)));

    match hit {
        Some((matched, pattern)) => vec![Warning::new(
            index,
            WarningType::CategoryDrift,
            format!(
                "Generic engagement language \"{}\" while the business is not yet defined",
                matched
            ),
        )
        .with_matched_phrase(matched)
        .with_meta(WarningMeta {
            phrases: Some(vec![matched.to_string()]),
            pattern: Some(pattern.to_string()),
            ..WarningMeta::default()
        })],
        None => Vec::new(),
    }
}

fn check_mechanism_drift(index: usize, text: &str, ctx: &CheckContext) -> Vec<Warning> {
    let mut phrases = Vec::new();
    for compiled in mechanism_terms() {
        if let Some(m) = compiled.regex.find(text) {
            if !ctx.corpus.contains(compiled.entry) {
                push_unique(&mut phrases, m.as_str());
            }
        }
    }

    if phrases.is_empty() {
        return Vec::new();
    }
    vec![Warning::new(
        index,
        WarningType::CategoryDrift,
        format!("Introduces product/mechanism terms not in context: {}", quote_list(&phrases)),
    )
    .with_matched_phrase(phrases[0].clone())
    .with_meta(WarningMeta::phrases(phrases))]
}

fn check_cro_drift(index: usize, text: &str, ctx: &CheckContext) -> Vec<Warning> {
    let mut phrases = Vec::new();
    let mut labels = Vec::new();

    for compiled in cro_patterns() {
        let Some(m) = compiled.regex.find(text) else {
            continue;
        };
        if ctx.corpus.contains(m.as_str()) || ctx.corpus.contains(compiled.entry.label) {
            continue;
        }
        push_unique(&mut phrases, m.as_str());
        push_unique(&mut labels, compiled.entry.label);
    }

    if phrases.is_empty() {
        return Vec::new();
    }
    vec![Warning::new(
        index,
        WarningType::CategoryDrift,
        format!("Website-audit/CRO language not in context: {}", labels.join(", ")),
    )
    .with_matched_phrase(phrases[0].clone())
    .with_meta(WarningMeta {
        phrases: Some(phrases),
        tags: Some(labels),
        ..WarningMeta::default()
    })]
}

fn check_domain_mismatch(index: usize, text: &str, ctx: &CheckContext) -> Vec<Warning> {
    let mut phrases = Vec::new();
    let mut domains = Vec::new();

    for compiled in domain_indicators() {
        let Some(m) = compiled.regex.find(text) else {
            continue;
        };
        let domain = compiled.entry.domain;
        let domain_grounded = domain
            .split_whitespace()
            .filter(|keyword| keyword.len() >= 3)
            .any(|keyword| ctx.corpus.contains(keyword));
        if domain_grounded || ctx.corpus.contains(m.as_str()) {
            continue;
        }
        push_unique(&mut phrases, m.as_str());
        push_unique(&mut domains, domain);
    }

    if phrases.is_empty() {
        return Vec::new();
    }
    vec![Warning::new(
        index,
        WarningType::DomainMismatch,
        format!(
            "Mentions {} ({}) but the context is not in that domain",
            domains.join(", "),
            quote_list(&phrases)
        ),
    )
    .with_matched_phrase(phrases[0].clone())
    .with_meta(WarningMeta {
        phrases: Some(phrases),
        tags: Some(domains),
        ..WarningMeta::default()
    })]
}

fn check_product_category_drift(index: usize, text: &str, ctx: &CheckContext) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for compiled in drift_rules() {
        if !compiled.indicators.iter().any(|re| ctx.corpus.is_match(re)) {
            continue;
        }

        let hit = compiled.drift.iter().find_map(|drift| {
            drift
                .regex
                .find(text)
                .filter(|m| !ctx.corpus.contains(m.as_str()))
                .map(|m| (m.as_str(), drift.entry))
        });

        if let Some((matched, drift)) = hit {
            warnings.push(
                Warning::new(
                    index,
                    WarningType::DomainMismatch,
                    format!("\"{}\" {}", matched, drift.description),
                )
                .with_matched_phrase(matched)
                .with_meta(WarningMeta {
                    phrases: Some(vec![matched.to_string()]),
                    pattern: Some(drift.pattern.to_string()),
                    constraint: Some(compiled.rule.id.to_string()),
                    tags: None,
                }),
            );
        }
    }

    warnings
}

fn check_constraint_violations(index: usize, text: &str, ctx: &CheckContext) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for compiled in constraint_rules() {
        let rule = compiled.rule;
        let limiting_field = ctx.snapshot.fields.iter().find_map(|(path, value)| {
            if !field_applies(rule, &path.to_lowercase()) {
                return None;
            }
            let value_text = value.as_text()?;
            signals_limit(&rule.signal, &value_text.to_lowercase()).then(|| (path, value_text))
        });

        let Some((path, value_text)) = limiting_field else {
            continue;
        };

        for claim in &compiled.claims {
            let Some(m) = claim.find(text) else {
                continue;
            };
            warnings.push(
                Warning::new(
                    index,
                    WarningType::ConstraintViolation,
                    format!("\"{}\": {} ({} = \"{}\")", m.as_str(), rule.reason, path, value_text),
                )
                .with_matched_phrase(m.as_str())
                .with_meta(WarningMeta {
                    phrases: Some(vec![m.as_str().to_string()]),
                    pattern: Some(claim.as_str().to_string()),
                    constraint: Some(path.clone()),
                    tags: Some(vec![rule.id.to_string()]),
                }),
            );
        }
    }

    warnings
}

fn check_quality(index: usize, text: &str, ctx: &CheckContext) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let trimmed = text.trim();

    let chars = trimmed.chars().count();
    if chars < MIN_VARIANT_CHARS {
        warnings.push(Warning::new(
            index,
            WarningType::QualityTooShort,
            format!(
                "Variant is too short ({} characters, minimum {})",
                chars, MIN_VARIANT_CHARS
            ),
        ));
    }

    let max_words = ctx.contract.max_words();
    if max_words > 0 {
        let words = trimmed.split_whitespace().count();
        let limit = f64::from(max_words) * WORD_LIMIT_TOLERANCE;
        if words as f64 > limit {
            warnings.push(
                Warning::new(
                    index,
                    WarningType::QualityTooLong,
                    format!("Variant has {} words, limit is {}", words, max_words),
                )
                .with_meta(WarningMeta {
                    constraint: Some(format!("maxWords={}", max_words)),
                    ..WarningMeta::default()
                }),
            );
        }
    }

    if let Some(m) = placeholder_regex().and_then(|re| re.find(trimmed)) {
        warnings.push(
            Warning::new(
                index,
                WarningType::QualityPlaceholder,
                format!("Unfilled placeholder {}", m.as_str()),
            )
            .with_matched_phrase(m.as_str()),
        );
    }

    warnings
}

fn placeholder_regex() -> Option<&'static Regex> {
    static CELL: OnceLock<Option<Regex>> = OnceLock::new();
    CELL.get_or_init(|| compile(r"\[[^\[\]\n]*\]")).as_ref()
}

fn amount_regex() -> Option<&'static Regex> {
    static CELL: OnceLock<Option<Regex>> = OnceLock::new();
    CELL.get_or_init(|| {
        compile(r"(?:^|[^\w.$€£])([$€£])?\s?(\d[\d,]*(?:\.\d+)?)\s*(thousand|million|billion|mm|bn|k|m|b)?\b")
    })
    .as_ref()
}

fn field_applies(rule: &ConstraintRule, path: &str) -> bool {
    rule.field_keywords.iter().any(|k| path.contains(k))
        && (rule.field_requires.is_empty() || rule.field_requires.iter().any(|k| path.contains(k)))
        && !rule.field_excludes.iter().any(|k| path.contains(k))
}

fn signals_limit(signal: &LimitSignal, value: &str) -> bool {
    match signal {
        LimitSignal::SmallAmount { words, at_most } => {
            mentions_any(value, words) || stated_amount(value).is_some_and(|amount| amount <= *at_most)
        }
        LimitSignal::AnyAmount => stated_amount(value).is_some_and(|amount| amount > 0.0),
        LimitSignal::Mentions(words) => mentions_any(value, words),
    }
}

fn mentions_any(value: &str, words: &[&str]) -> bool {
    words
        .iter()
        .any(|w| compile(&word_pattern(w)).is_some_and(|re| re.is_match(value)))
}

/// A figure read from a context value
#[derive(Debug, Clone, Copy, PartialEq)]
struct Amount {
    value: f64,
    /// Carried a currency symbol or a magnitude
    marked: bool,
}

/// Every figure in `text`, skipping years, percentages and tokens like `FY2026` or `Q4`
fn amounts(text: &str) -> Vec<Amount> {
    let Some(re) = amount_regex() else {
        return Vec::new();
    };

    re.captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if text[whole.end()..].starts_with('%') {
                return None;
            }
            let digits = caps.get(2)?.as_str();
            let number: f64 = digits.replace(',', "").parse().ok()?;
            let currency = caps.get(1).is_some();
            let suffix = caps.get(3).map(|m| m.as_str().to_lowercase());

            let looks_like_year = !currency
                && suffix.is_none()
                && digits.len() == 4
                && digits.bytes().all(|b| b.is_ascii_digit())
                && (1900.0..=2100.0).contains(&number);
            if looks_like_year {
                return None;
            }

            let multiplier = match suffix.as_deref() {
                Some("k" | "thousand") => 1_000.0,
                Some("m" | "mm" | "million") => 1_000_000.0,
                Some("b" | "bn" | "billion") => 1_000_000_000.0,
                _ => 1.0,
            };
            Some(Amount {
                value: number * multiplier,
                marked: currency || suffix.is_some(),
            })
        })
        .collect()
}

/// The amount a value states: the first one with a currency or magnitude, else the first figure
fn stated_amount(text: &str) -> Option<f64> {
    let found = amounts(text);
    found
        .iter()
        .find(|a| a.marked)
        .or_else(|| found.first())
        .map(|a| a.value)
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing.eq_ignore_ascii_case(item)) {
        list.push(item.to_string());
    }
}

fn quote_list(phrases: &[String]) -> String {
    phrases
        .iter()
        .map(|p| format!("\"{}\"", p))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::CONSTRAINT_RULES;

    fn run(check: Check, text: &str, contract: &GenerationContract, snapshot: &ContextSnapshot) -> Vec<Warning> {
        run_with(check, text, contract, snapshot, &ValidatorOptions::default())
    }

    fn run_with(
        check: Check,
        text: &str,
        contract: &GenerationContract,
        snapshot: &ContextSnapshot,
        options: &ValidatorOptions,
    ) -> Vec<Warning> {
        let corpus = ContextCorpus::from_snapshot(snapshot);
        let ctx = CheckContext {
            contract,
            snapshot,
            corpus: &corpus,
            options,
        };
        check(0, text, &ctx)
    }

    fn empty() -> (GenerationContract, ContextSnapshot) {
        (GenerationContract::default(), ContextSnapshot::new())
    }

    #[test]
    fn test_banned_phrase_first_hit_wins() {
        let contract = GenerationContract::new(vec!["Cheap".into(), "synergy".into()], 0);
        let warnings = run(
            check_banned_phrase,
            "Synergy at cheap prices",
            &contract,
            &ContextSnapshot::new(),
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].matched_phrase.as_deref(), Some("Cheap"));
        assert_eq!(
            warnings[0].meta.as_ref().and_then(|m| m.phrases.clone()),
            Some(vec!["Cheap".to_string()])
        );
    }

    #[test]
    fn test_banned_phrase_ignores_blank_exclusions() {
        let contract = GenerationContract::new(vec!["  ".into()], 0);
        assert!(run(check_banned_phrase, "anything", &contract, &ContextSnapshot::new()).is_empty());
    }

    #[test]
    fn test_invented_claims_collects_matches() {
        let (contract, snapshot) = empty();
        let warnings = run(
            check_invented_claims,
            "Award-winning proprietary technology with guaranteed results.",
            &contract,
            &snapshot,
        );
        assert_eq!(warnings.len(), 1);
        let phrases = warnings[0].meta.as_ref().unwrap().phrases.clone().unwrap();
        assert!(phrases.contains(&"proprietary technology".to_string()));
        assert!(phrases.contains(&"guaranteed results".to_string()));
        assert!(phrases.contains(&"Award-winning".to_string()));
    }

    #[test]
    fn test_invented_claims_dollar_amount() {
        let (contract, snapshot) = empty();
        let warnings = run(check_invented_claims, "Save $5,000 every year", &contract, &snapshot);
        assert_eq!(warnings[0].matched_phrase.as_deref(), Some("$5,000"));
    }

    #[test]
    fn test_invented_claims_ranking_needs_boundary() {
        let (contract, snapshot) = empty();
        assert!(run(check_invented_claims, "Voted #12 in the county fair", &contract, &snapshot).is_empty());
        let warnings = run(check_invented_claims, "The #1 bakery in town", &contract, &snapshot);
        assert_eq!(warnings[0].matched_phrase.as_deref(), Some("#1"));
    }

    #[test]
    fn test_invented_claims_figures_from_context_allowed() {
        let contract = GenerationContract::default();
        let snapshot = ContextSnapshot::new()
            .with_text("pricing.plan", "$800/month")
            .with_text("business.proof", "Serving 500 customers since 2010");
        assert!(run(
            check_invented_claims,
            "Plans from $800 a month, loved by 500 customers",
            &contract,
            &snapshot
        )
        .is_empty());

        let warnings = run(check_invented_claims, "Save $5,000 with 800 customers", &contract, &snapshot);
        assert_eq!(warnings.len(), 1);
        let phrases = warnings[0].meta.as_ref().unwrap().phrases.clone().unwrap();
        assert_eq!(phrases, vec!["$5,000".to_string(), "800 customers".to_string()]);
    }

    #[test]
    fn test_fluff_suppressed_when_grounded() {
        let contract = GenerationContract::default();
        let snapshot = ContextSnapshot::new().with_text("tagline", "Seamless booking for salons");
        let warnings = run(
            check_generic_fluff,
            "A seamless, innovative salon experience",
            &contract,
            &snapshot,
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].matched_phrase.as_deref(), Some("innovative"));
        assert_eq!(
            warnings[0].meta.as_ref().unwrap().phrases,
            Some(vec!["innovative".to_string()])
        );
    }

    #[test]
    fn test_engagement_drift_only_when_definition_missing() {
        let (contract, snapshot) = empty();
        let text = "We drive engagement and customer engagement";
        assert!(run(check_engagement_drift, text, &contract, &snapshot).is_empty());

        let missing = ValidatorOptions {
            business_definition_missing: true,
            has_gap_business_summary: false,
        };
        let warnings = run_with(check_engagement_drift, text, &contract, &snapshot, &missing);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].warning_type, WarningType::CategoryDrift);
        assert_eq!(warnings[0].matched_phrase.as_deref(), Some("customer engagement"));

        let covered = ValidatorOptions {
            business_definition_missing: true,
            has_gap_business_summary: true,
        };
        assert!(run_with(check_engagement_drift, text, &contract, &snapshot, &covered).is_empty());
    }

    #[test]
    fn test_mechanism_drift_word_bounded() {
        let (contract, snapshot) = empty();
        let warnings = run(
            check_mechanism_drift,
            "Apply today through our dashboard and app",
            &contract,
            &snapshot,
        );
        assert_eq!(warnings.len(), 1);
        let phrases = warnings[0].meta.as_ref().unwrap().phrases.clone().unwrap();
        assert_eq!(phrases, vec!["dashboard".to_string(), "app".to_string()]);
    }

    #[test]
    fn test_mechanism_drift_grounded_term() {
        let contract = GenerationContract::default();
        let snapshot = ContextSnapshot::new().with_list("products", vec!["Scheduling platform"]);
        assert!(run(check_mechanism_drift, "Our platform saves time", &contract, &snapshot).is_empty());
    }

    #[test]
    fn test_mechanism_drift_not_grounded_inside_words() {
        let contract = GenerationContract::default();
        let snapshot =
            ContextSnapshot::new().with_text("business.description", "Licensed therapist helping happy couples");
        let warnings = run(
            check_mechanism_drift,
            "Book through our app or connect via our API.",
            &contract,
            &snapshot,
        );
        assert_eq!(warnings.len(), 1);
        let phrases = warnings[0].meta.as_ref().unwrap().phrases.clone().unwrap();
        assert_eq!(phrases, vec!["app".to_string(), "API".to_string()]);
    }

    #[test]
    fn test_cro_drift_label_grounds_match() {
        let contract = GenerationContract::default();
        let snapshot = ContextSnapshot::new().with_text("services", "A/B testing for landing pages");
        assert!(run(check_cro_drift, "We run split tests weekly", &contract, &snapshot).is_empty());

        let warnings = run(
            check_cro_drift,
            "Lower your bounce rate today",
            &contract,
            &snapshot,
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].meta.as_ref().unwrap().tags,
            Some(vec!["bounce rate".to_string()])
        );
    }

    #[test]
    fn test_domain_keyword_in_context_suppresses() {
        let contract = GenerationContract::default();
        let snapshot = ContextSnapshot::new().with_text("industry", "healthcare");
        assert!(run(
            check_domain_mismatch,
            "Better patient outcomes every day",
            &contract,
            &snapshot
        )
        .is_empty());
    }

    #[test]
    fn test_domain_mismatch_tags_domain() {
        let (contract, snapshot) = empty();
        let warnings = run(
            check_domain_mismatch,
            "Help students and attorneys alike",
            &contract,
            &snapshot,
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].warning_type, WarningType::DomainMismatch);
        assert_eq!(
            warnings[0].meta.as_ref().unwrap().tags,
            Some(vec!["education".to_string(), "legal".to_string()])
        );
    }

    #[test]
    fn test_product_drift_needs_context_indicator() {
        let contract = GenerationContract::default();
        let text = "Now shipping worldwide";
        assert!(run(check_product_category_drift, text, &contract, &ContextSnapshot::new()).is_empty());

        let snapshot = ContextSnapshot::new().with_text("business.description", "Family-owned local bakery");
        let warnings = run(check_product_category_drift, text, &contract, &snapshot);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].matched_phrase.as_deref(), Some("worldwide"));
        assert_eq!(
            warnings[0].meta.as_ref().unwrap().constraint.as_deref(),
            Some("local_business_scale")
        );
    }

    #[test]
    fn test_product_drift_grounded_term_skipped() {
        let contract = GenerationContract::default();
        let snapshot = ContextSnapshot::new()
            .with_text("business.description", "Handmade candles")
            .with_list("offers", vec!["monthly subscription box"]);
        assert!(run(
            check_product_category_drift,
            "Join our subscription today",
            &contract,
            &snapshot
        )
        .is_empty());
    }

    #[test]
    fn test_constraint_small_budget_enterprise_claim() {
        let contract = GenerationContract::default();
        let snapshot = ContextSnapshot::new().with_text("constraints.budget", "$800/month");
        let warnings = run(
            check_constraint_violations,
            "Enterprise-grade support with unlimited revisions",
            &contract,
            &snapshot,
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.is_error()));
        assert_eq!(warnings[0].matched_phrase.as_deref(), Some("Enterprise-grade"));
        assert_eq!(
            warnings[0].meta.as_ref().unwrap().constraint.as_deref(),
            Some("constraints.budget")
        );
    }

    #[test]
    fn test_constraint_large_budget_is_fine() {
        let contract = GenerationContract::default();
        let snapshot = ContextSnapshot::new().with_text("constraints.budget", "$250k per year");
        assert!(run(
            check_constraint_violations,
            "Enterprise-grade support",
            &contract,
            &snapshot
        )
        .is_empty());
    }

    #[test]
    fn test_constraint_budget_not_small() {
        let contract = GenerationContract::default();
        for budget in [
            "Unlimited",
            "2 million dollars",
            "FY2026: $2M",
            "Flexible, allow up to $500k",
            "$250k per year",
        ] {
            let snapshot = ContextSnapshot::new().with_text("constraints.budget", budget);
            let warnings = run(
                check_constraint_violations,
                "Enterprise-grade support for your team",
                &contract,
                &snapshot,
            );
            assert!(warnings.is_empty(), "budget {:?} read as small", budget);
        }
    }

    #[test]
    fn test_constraint_small_budget_wording() {
        let contract = GenerationContract::default();
        let snapshot = ContextSnapshot::new().with_text("constraints.budget", "Tight, bootstrapped");
        let warnings = run(
            check_constraint_violations,
            "White-glove onboarding",
            &contract,
            &snapshot,
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].meta.as_ref().unwrap().tags,
            Some(vec!["budget_cap".to_string()])
        );
    }

    #[test]
    fn test_constraint_timeline_fires() {
        let contract = GenerationContract::default();
        let snapshot = ContextSnapshot::new().with_text("delivery.timeline", "2-3 weeks");
        let warnings = run(
            check_constraint_violations,
            "Same-day delivery on every order",
            &contract,
            &snapshot,
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].matched_phrase.as_deref(), Some("Same-day"));
        assert_eq!(
            warnings[0].meta.as_ref().unwrap().tags,
            Some(vec!["timeline".to_string()])
        );
    }

    #[test]
    fn test_constraint_timeline_without_long_lead_time() {
        let contract = GenerationContract::default();
        let snapshot = ContextSnapshot::new().with_text("delivery.timeline", "48 hours");
        assert!(run(
            check_constraint_violations,
            "Same-day delivery on every order",
            &contract,
            &snapshot
        )
        .is_empty());

        let weekly = ContextSnapshot::new().with_text("delivery.timeline", "1 month");
        assert!(run(
            check_constraint_violations,
            "Handcrafted with care",
            &contract,
            &weekly
        )
        .is_empty());
    }

    #[test]
    fn test_constraint_price_floor() {
        let contract = GenerationContract::default();
        let snapshot = ContextSnapshot::new().with_text("pricing.min_price", "150");
        let warnings = run(
            check_constraint_violations,
            "Get started for free",
            &contract,
            &snapshot,
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].warning_type, WarningType::ConstraintViolation);
    }

    #[test]
    fn test_constraint_team_size_numeric_field() {
        let contract = GenerationContract::default();
        let snapshot =
            ContextSnapshot::from_json_str(r#"{"fields": {"resources.team_size": 2}}"#).unwrap();
        let warnings = run(
            check_constraint_violations,
            "Our team of experts answers 24/7",
            &contract,
            &snapshot,
        );
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_quality_length_boundary() {
        let (contract, snapshot) = empty();
        let ten = run(check_quality, "abcdefghij", &contract, &snapshot);
        assert!(ten.iter().all(|w| w.warning_type != WarningType::QualityTooShort));
        let nine = run(check_quality, "abcdefghi", &contract, &snapshot);
        assert!(nine.iter().any(|w| w.warning_type == WarningType::QualityTooShort));
    }

    #[test]
    fn test_quality_word_limit_boundary() {
        let contract = GenerationContract::new(Vec::new(), 20);
        let snapshot = ContextSnapshot::new();
        let thirty = vec!["word"; 30].join(" ");
        let thirty_one = vec!["word"; 31].join(" ");
        assert!(run(check_quality, &thirty, &contract, &snapshot).is_empty());
        let warnings = run(check_quality, &thirty_one, &contract, &snapshot);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].warning_type, WarningType::QualityTooLong);
    }

    #[test]
    fn test_quality_placeholder() {
        let (contract, snapshot) = empty();
        let warnings = run(check_quality, "[INSERT BENEFIT HERE]", &contract, &snapshot);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].warning_type, WarningType::QualityPlaceholder);
        assert_eq!(warnings[0].matched_phrase.as_deref(), Some("[INSERT BENEFIT HERE]"));
    }

    #[test]
    fn test_stated_amount() {
        assert_eq!(stated_amount("$1,500 per month"), Some(1500.0));
        assert_eq!(stated_amount("under 5k"), Some(5000.0));
        assert_eq!(stated_amount("2 people"), Some(2.0));
        assert_eq!(stated_amount("5 months"), Some(5.0));
        assert_eq!(stated_amount("2 million dollars"), Some(2_000_000.0));
        assert_eq!(stated_amount("FY2026: $2M"), Some(2_000_000.0));
        assert_eq!(stated_amount("Q4 spend of 3.5 thousand"), Some(3500.0));
        assert_eq!(stated_amount("1.2bn"), Some(1_200_000_000.0));
        assert_eq!(stated_amount("Planned for 2026"), None);
        assert_eq!(stated_amount("20% of revenue"), None);
        assert_eq!(stated_amount("none"), None);
    }

    #[test]
    fn test_limit_words_are_whole_words() {
        let budget = &CONSTRAINT_RULES[0].signal;
        assert!(signals_limit(budget, "small budget"));
        assert!(signals_limit(budget, "low"));
        assert!(!signals_limit(budget, "unlimited"));
        assert!(!signals_limit(budget, "allow whatever it takes"));
        assert!(!signals_limit(budget, "below the line, follow up later"));
    }
}
