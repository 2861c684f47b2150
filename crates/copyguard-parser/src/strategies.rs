//! Individual output-format strategies
//!
//! Each strategy returns `None` when its format is not present. A strategy
//! that only finds blank entries also returns `None` so the next one runs.

use crate::clean::clean_variant_text;
use crate::pattern::cached;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::debug;

static CODE_FENCE: OnceLock<Option<Regex>> = OnceLock::new();
static NUMBERED_LINE: OnceLock<Option<Regex>> = OnceLock::new();
static BULLET_LINE: OnceLock<Option<Regex>> = OnceLock::new();
static BLANK_LINES: OnceLock<Option<Regex>> = OnceLock::new();

const MIN_PARAGRAPH_CHARS: usize = 10;

/// `{"variants": [...]}` or a bare array; entries are strings or `{"text": ...}`
pub(crate) fn parse_json(output: &str) -> Option<Vec<String>> {
    let body = strip_code_fence(output);

    let entries = slice_between(body, '{', '}')
        .and_then(|slice| parse_value(slice, "object"))
        .and_then(|value| match value {
            Value::Object(mut map) => match map.remove("variants") {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            },
            _ => None,
        })
        .or_else(|| {
            slice_between(body, '[', ']')
                .and_then(|slice| parse_value(slice, "array"))
                .and_then(|value| match value {
                    Value::Array(items) => Some(items),
                    _ => None,
                })
        })?;

    non_empty(entries.iter().filter_map(entry_text).map(|t| clean_variant_text(&t)))
}

/// Lines like `1. text`, `2) text`, `3: text`
pub(crate) fn parse_numbered(output: &str) -> Option<Vec<String>> {
    let re = cached(&NUMBERED_LINE, r"^\s*\d+[.):\s]+(.*)$")?;
    collect_marked_items(output, re)
}

/// Lines like `- text`, `* text`, `• text`
pub(crate) fn parse_bullets(output: &str) -> Option<Vec<String>> {
    let re = cached(&BULLET_LINE, r"^\s*[-*•]\s+(.*)$")?;
    collect_marked_items(output, re)
}

/// Blank-line separated blocks; needs at least two substantial paragraphs
pub(crate) fn parse_paragraphs(output: &str) -> Option<Vec<String>> {
    let re = cached(&BLANK_LINES, r"\n\s*\n")?;
    let paragraphs: Vec<String> = re
        .split(output.trim())
        .filter(|p| p.trim().chars().count() > MIN_PARAGRAPH_CHARS)
        .map(clean_variant_text)
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.len() >= 2 {
        Some(paragraphs)
    } else {
        None
    }
}

/// The whole output as one variant
pub(crate) fn parse_fallback(output: &str) -> Option<Vec<String>> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return None;
    }

    let cleaned = clean_variant_text(trimmed);
    if cleaned.is_empty() {
        Some(vec![trimmed.to_string()])
    } else {
        Some(vec![cleaned])
    }
}

fn strip_code_fence(output: &str) -> &str {
    cached(&CODE_FENCE, r"(?s)```[A-Za-z]*\s*(.*?)```")
        .and_then(|re| re.captures(output))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(output)
}

fn slice_between(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}

fn parse_value(slice: &str, shape: &str) -> Option<Value> {
    match serde_json::from_str(slice) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(shape, error = %e, "json candidate did not parse");
            None
        }
    }
}

fn entry_text(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("text").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// Group each marker line with its continuation lines until the next marker
fn collect_marked_items(output: &str, marker: &Regex) -> Option<Vec<String>> {
    let mut items: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in output.lines() {
        if let Some(caps) = marker.captures(line) {
            if let Some(done) = current.take() {
                items.push(done);
            }
            let first = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            current = Some(first.to_string());
        } else if let Some(item) = current.as_mut() {
            let continuation = line.trim();
            if !continuation.is_empty() {
                if !item.is_empty() {
                    item.push(' ');
                }
                item.push_str(continuation);
            }
        }
    }
    if let Some(done) = current {
        items.push(done);
    }

    non_empty(items.iter().map(|item| clean_variant_text(item)))
}

fn non_empty(texts: impl Iterator<Item = String>) -> Option<Vec<String>> {
    let texts: Vec<String> = texts.filter(|t| !t.trim().is_empty()).collect();
    if texts.is_empty() {
        None
    } else {
        Some(texts)
    }
}
