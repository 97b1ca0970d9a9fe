//! Contact-person extraction cascade.

use crate::options::Options;
use crate::patterns::{PERSON_HONORIFIC, PERSON_LABELED};
use crate::record::{FieldTrace, Strategy};
use crate::section::DocumentSection;

/// Tokens that mark a captured span as an organization or department
/// rather than a person.
const ORG_TOKENS: &[&str] = &[
    "会社", "株式", "法人", "企業", "チーム", "部門", "広報", "事務局",
];

/// Accepted name length range, in characters.
const NAME_CHARS: std::ops::RangeInclusive<usize> = 2..=10;

/// Resolve a named contact person.
///
/// Labels are the strongest signal, honorific markers the next, and a
/// labeled scan over the whole document the last resort. Department
/// and organization spans are rejected at every tier.
#[must_use]
pub fn extract(
    section: Option<&DocumentSection>,
    full_text: &str,
    options: &Options,
) -> Option<(String, FieldTrace)> {
    let w = &options.weights;

    if let Some(text) = section.map(|s| s.text.as_str()) {
        if let Some(name) = labeled(text) {
            return Some((name, FieldTrace::new(Strategy::LabeledText, w.person_labeled)));
        }
        if let Some(name) = honorific(text) {
            return Some((
                name,
                FieldTrace::new(Strategy::SectionKeyword, w.person_honorific),
            ));
        }
    }
    if let Some(name) = labeled(full_text).or_else(|| honorific(full_text)) {
        return Some((
            name,
            FieldTrace::new(Strategy::FullTextFallback, w.person_fulltext),
        ));
    }
    None
}

fn labeled(text: &str) -> Option<String> {
    PERSON_LABELED
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .find_map(accept)
}

fn honorific(text: &str) -> Option<String> {
    PERSON_HONORIFIC
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .find_map(accept)
}

fn accept(raw: &str) -> Option<String> {
    let name = raw.trim();
    if !NAME_CHARS.contains(&name.chars().count()) {
        return None;
    }
    if ORG_TOKENS.iter().any(|t| name.contains(t)) {
        return None;
    }
    Some(name.to_string())
}
