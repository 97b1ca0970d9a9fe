//! Company-name extraction cascade.

use serde_json::Value;

use crate::dom::{self, Document, Selection};
use crate::normalize::normalize;
use crate::options::Options;
use crate::patterns::{COMPANY_EN, COMPANY_PREFIXED, COMPANY_SUFFIXED, TITLE_COMPANY};
use crate::record::{FieldTrace, Strategy};
use crate::section::DocumentSection;

/// Elements that carry the publisher name on release pages, in
/// priority order.
const COMPANY_SELECTORS: &[&str] = &[
    ".release-company",
    "a.link-to-company",
    "[class*='company']",
];

/// Longest plausible company name, in characters.
const MAX_NAME_CHARS: usize = 50;

/// Resolve the publisher company name.
///
/// Tiers: dedicated structural element, site-name metadata, title
/// pattern, JSON-LD structured data, then a legal-entity regex over
/// the contact section and finally the full text.
#[must_use]
pub fn extract(
    doc: &Document,
    section: Option<&DocumentSection>,
    full_text: &str,
    options: &Options,
) -> Option<(String, FieldTrace)> {
    let w = &options.weights;

    if let Some(name) = structural(doc) {
        return Some((name, FieldTrace::new(Strategy::Structural, w.company_structural)));
    }
    if let Some(name) = site_name(doc, options) {
        return Some((name, FieldTrace::new(Strategy::Metadata, w.company_metadata)));
    }
    if let Some(name) = from_title(doc) {
        return Some((name, FieldTrace::new(Strategy::TitlePattern, w.company_title)));
    }
    if let Some(name) = structured_data(doc) {
        return Some((
            name,
            FieldTrace::new(Strategy::StructuredData, w.company_structured),
        ));
    }
    if let Some(text) = section.map(|s| s.text.as_str()) {
        if let Some(name) = legal_entity(text) {
            return Some((
                name,
                FieldTrace::new(Strategy::SectionKeyword, w.company_fulltext),
            ));
        }
    }
    if let Some(name) = legal_entity(full_text) {
        return Some((
            name,
            FieldTrace::new(Strategy::FullTextFallback, w.company_fulltext),
        ));
    }
    None
}

fn structural(doc: &Document) -> Option<String> {
    for selector in COMPANY_SELECTORS {
        let sel = doc.select_single(selector);
        if sel.exists() {
            if let Some(name) = accept(&dom::text_content(&sel)) {
                return Some(name);
            }
        }
    }
    None
}

/// Site-name metadata, with listing-site suffixes stripped off.
fn site_name(doc: &Document, options: &Options) -> Option<String> {
    let meta = doc.select_single(r#"meta[property="og:site_name"]"#);
    if !meta.exists() {
        return None;
    }
    let mut value = normalize(&dom::get_attribute(&meta, "content")?);
    for suffix in &options.sitename_suffixes {
        if let Some(stripped) = value.strip_suffix(suffix.as_str()) {
            value = stripped.trim().to_string();
        }
    }
    if options.site_tokens.iter().any(|t| value == *t) {
        return None;
    }
    accept(&value)
}

fn from_title(doc: &Document) -> Option<String> {
    let title = doc.select_single("title");
    if !title.exists() {
        return None;
    }
    let text = normalize(&dom::text_content(&title));
    let caps = TITLE_COMPANY.captures(&text)?;
    accept(caps.get(1)?.as_str())
}

/// Publisher name from embedded JSON-LD, trying `author` then
/// `publisher`. Malformed blocks are skipped.
fn structured_data(doc: &Document) -> Option<String> {
    for node in doc
        .select(r#"script[type="application/ld+json"]"#)
        .nodes()
    {
        let raw = Selection::from(*node).text();
        let Ok(value) = serde_json::from_str::<Value>(raw.trim()) else {
            continue;
        };
        if let Some(name) = name_from_ld(&value).and_then(|n| accept(&n)) {
            return Some(name);
        }
    }
    None
}

fn name_from_ld(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items.iter().find_map(name_from_ld),
        Value::Object(map) => ["author", "publisher"].iter().find_map(|key| {
            map.get(*key)
                .and_then(|entity| entity.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string)
        }),
        _ => None,
    }
}

fn legal_entity(text: &str) -> Option<String> {
    for pattern in [&*COMPANY_PREFIXED, &*COMPANY_SUFFIXED, &*COMPANY_EN] {
        if let Some(m) = pattern.find(text) {
            if let Some(name) = accept(m.as_str()) {
                return Some(name);
            }
        }
    }
    None
}

fn accept(raw: &str) -> Option<String> {
    let name = normalize(raw);
    if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
        return None;
    }
    Some(name)
}
