//! Phone-number extraction cascade.
//!
//! Every candidate, whatever its tier, runs through [`clean`]: digits
//! are folded to half-width, a `+81` country prefix is rewritten to a
//! leading `0`, the digit count is validated (10 or 11, starting with
//! `0`), and the result is regrouped with hyphens. Candidates that fail
//! validation are discarded and the cascade moves on.

use crate::dom::{Document, Selection};
use crate::normalize::normalize;
use crate::options::Options;
use crate::patterns::{PHONE_BARE, PHONE_HYPHEN, PHONE_INTL, PHONE_LABELED, PHONE_PAREN};
use crate::record::{FieldTrace, Strategy};
use crate::section::DocumentSection;

/// Two-digit metropolitan area codes; all other area codes group as
/// 3-3-4.
const METRO_CODES: &[&str] = &["03", "04", "06"];

/// Resolve the contact phone number.
///
/// Tiers: labeled table rows and list items, label-anchored text
/// matches, then bare number patterns over the contact section and the
/// full text.
#[must_use]
pub fn extract(
    doc: &Document,
    section: Option<&DocumentSection>,
    full_text: &str,
    options: &Options,
) -> Option<(String, FieldTrace)> {
    let w = &options.weights;

    if let Some(phone) = from_structure(doc, options) {
        return Some((phone, FieldTrace::new(Strategy::Structural, w.phone_table)));
    }
    for text in section.map(|s| s.text.as_str()).into_iter().chain([full_text]) {
        if let Some(phone) = labeled(text) {
            return Some((phone, FieldTrace::new(Strategy::LabeledText, w.phone_labeled)));
        }
    }
    if let Some(text) = section.map(|s| s.text.as_str()) {
        if let Some(phone) = bare(text) {
            return Some((
                phone,
                FieldTrace::new(Strategy::SectionKeyword, w.phone_fulltext),
            ));
        }
    }
    if let Some(phone) = bare(full_text) {
        return Some((
            phone,
            FieldTrace::new(Strategy::FullTextFallback, w.phone_fulltext),
        ));
    }
    None
}

/// Table rows and list items whose text carries a phone label.
fn from_structure(doc: &Document, options: &Options) -> Option<String> {
    for node in doc.select("tr, li").nodes() {
        let text = normalize(&Selection::from(*node).text());
        let lowered = text.to_lowercase();
        if !options.phone_labels.iter().any(|l| lowered.contains(l.as_str())) {
            continue;
        }
        if let Some(phone) = labeled(&text).or_else(|| bare(&text)) {
            return Some(phone);
        }
    }
    None
}

fn labeled(text: &str) -> Option<String> {
    PHONE_LABELED
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .find_map(clean)
}

fn bare(text: &str) -> Option<String> {
    for pattern in [&*PHONE_HYPHEN, &*PHONE_PAREN, &*PHONE_INTL, &*PHONE_BARE] {
        if let Some(phone) = pattern.find_iter(text).find_map(|m| clean(m.as_str())) {
            return Some(phone);
        }
    }
    None
}

/// Validate and canonicalize a raw candidate span.
fn clean(raw: &str) -> Option<String> {
    let folded = normalize(raw);
    let folded = folded.trim();
    let domestic = match folded.strip_prefix("+81") {
        Some(rest) => format!("0{}", rest.trim_start_matches(['-', ' '])),
        None => folded.to_string(),
    };
    let digits: String = domestic.chars().filter(char::is_ascii_digit).collect();
    if !(10..=11).contains(&digits.len()) || !digits.starts_with('0') {
        return None;
    }
    Some(regroup(&digits))
}

/// Hyphenate a validated digit run: 11 digits as 3-4-4, 10 digits as
/// 2-4-4 for metropolitan codes and 3-3-4 otherwise.
fn regroup(digits: &str) -> String {
    if digits.len() == 11 {
        format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..])
    } else if METRO_CODES.contains(&&digits[..2]) {
        format!("{}-{}-{}", &digits[..2], &digits[2..6], &digits[6..])
    } else {
        format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
    }
}
