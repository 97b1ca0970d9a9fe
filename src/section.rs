//! Contact-section location.
//!
//! Narrows a full document to the region most likely to hold contact
//! details, in three tiers: structural main-content selectors, a
//! contact-keyword anchored ancestor walk, and keyword-bearing tables.
//! The tiers minimize false positives from navigation chrome without
//! requiring per-site templates; when all fail, callers fall back to
//! whole-document text.

use crate::dom::{self, Document, Selection};
use crate::normalize::normalize;
use crate::options::Options;
use crate::patterns::BOILERPLATE_CLASS;

/// Tags accepted as the enclosing block of a keyword hit.
const BLOCK_TAGS: &[&str] = &["div", "section", "p", "td", "table", "article"];

/// A narrowed span of a document's text, scoped to one extraction
/// call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSection {
    /// Normalized text of the located region.
    pub text: String,
    /// The contact keyword that anchored the region, when one did.
    pub keyword: Option<String>,
}

/// Locate the most likely contact-information region.
///
/// Priority order, first hit wins:
/// 1. a main-content region (ordered structural selectors, else the
///    body with header/footer/nav chrome pruned),
/// 2. within it, the block enclosing the earliest contact keyword,
///    skipping the site's own copyright boilerplate,
/// 3. any table whose text contains a contact keyword,
/// 4. `None`.
#[must_use]
pub fn locate_contact_section(doc: &Document, options: &Options) -> Option<DocumentSection> {
    if let Some(region) = main_region(doc, options) {
        if let Some(section) = keyword_section(&region, options) {
            return Some(section);
        }
    } else {
        let pruned = pruned_body(doc);
        let body = pruned.select("body");
        if body.exists() {
            if let Some(section) = keyword_section(&body, options) {
                return Some(section);
            }
        }
    }

    table_section(doc, options)
}

/// First matching main-content container, in selector priority order.
fn main_region<'a>(doc: &'a Document, options: &Options) -> Option<Selection<'a>> {
    for selector in &options.content_selectors {
        let region = doc.select_single(selector);
        if region.exists() {
            return Some(region);
        }
    }
    None
}

/// Body copy with navigation chrome removed, used when no structural
/// container matches.
fn pruned_body(doc: &Document) -> Document {
    let clone = dom::clone_document(doc);
    dom::remove(&clone.select("header, footer, nav"));
    for node in clone.select("[class]").nodes() {
        let sel = Selection::from(*node);
        if BOILERPLATE_CLASS.is_match(&dom::class(&sel)) {
            dom::remove(&sel);
        }
    }
    clone
}

/// Walk the region for the first qualifying contact-keyword hit.
///
/// Keywords are tried in priority order. For each hit the innermost
/// containing element is climbed to a block-level ancestor; candidates
/// carrying the site's copyright boilerplate are rejected.
fn keyword_section(region: &Selection, options: &Options) -> Option<DocumentSection> {
    for keyword in &options.contact_keywords {
        for node in region.select("*").nodes() {
            let sel = Selection::from(*node);
            if !sel.text().contains(keyword.as_str()) {
                continue;
            }
            // Prefer the innermost element holding the keyword text.
            if child_contains(&sel, keyword) {
                continue;
            }

            let block = enclosing_block(&sel);
            let block_text = block.text();
            if is_site_boilerplate(&block_text, options) {
                continue;
            }

            let text = normalize(&block_text);
            if text.is_empty() {
                continue;
            }
            return Some(DocumentSection {
                text,
                keyword: Some(keyword.clone()),
            });
        }
    }
    None
}

/// Any table whose full text mentions a contact keyword.
fn table_section(doc: &Document, options: &Options) -> Option<DocumentSection> {
    for node in doc.select("table").nodes() {
        let table = Selection::from(*node);
        let table_text = table.text();
        if is_site_boilerplate(&table_text, options) {
            continue;
        }
        if let Some(keyword) = options
            .contact_keywords
            .iter()
            .find(|k| table_text.contains(k.as_str()))
        {
            return Some(DocumentSection {
                text: normalize(&table_text),
                keyword: Some(keyword.clone()),
            });
        }
    }
    None
}

fn child_contains(sel: &Selection, keyword: &str) -> bool {
    sel.children()
        .nodes()
        .iter()
        .any(|n| Selection::from(*n).text().contains(keyword))
}

fn enclosing_block<'a>(sel: &Selection<'a>) -> Selection<'a> {
    let mut current = sel.clone();
    loop {
        if dom::is_one_of_tags(&current, BLOCK_TAGS) {
            return current;
        }
        let up = dom::parent(&current);
        if !up.exists() {
            return current;
        }
        current = up;
    }
}

fn is_site_boilerplate(text: &str, options: &Options) -> bool {
    text.contains(&options.copyright_marker)
        && options.site_tokens.iter().any(|t| text.contains(t.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    #[test]
    fn keyword_hit_returns_enclosing_block() {
        let doc = parse(
            r#"<html><body><main>
                <p>新製品を発表しました。</p>
                <div><h3>本件に関するお問い合わせ</h3>
                     <p>広報部 TEL: 03-1234-5678</p></div>
            </main></body></html>"#,
        );
        let section = locate_contact_section(&doc, &Options::default());
        let section = section.expect("section should be located");
        assert!(section.text.contains("03-1234-5678"));
        assert_eq!(section.keyword.as_deref(), Some("本件に関するお問い合わせ"));
    }

    #[test]
    fn copyright_footer_is_rejected() {
        let doc = parse(
            r#"<html><body>
                <div class="release">本文のみ。</div>
                <div>お問い合わせ Copyright PR TIMES Corporation.</div>
            </body></html>"#,
        );
        let section = locate_contact_section(&doc, &Options::default());
        assert!(section.is_none());
    }

    #[test]
    fn keyword_table_is_found_as_last_structural_tier() {
        let doc = parse(
            r#"<html><body><article><p>本文</p></article>
            <table><tr><td>お問い合わせ</td><td>pr@company.jp</td></tr></table>
            </body></html>"#,
        );
        let section = locate_contact_section(&doc, &Options::default());
        let section = section.expect("table tier should match");
        assert!(section.text.contains("pr@company.jp"));
    }

    #[test]
    fn chrome_is_pruned_from_body_fallback() {
        let doc = parse(
            r#"<html><body>
                <div class="global-nav">お問い合わせ（ナビ）</div>
                <div><p>問い合わせ先: 広報部 山田</p></div>
            </body></html>"#,
        );
        let section = locate_contact_section(&doc, &Options::default());
        let section = section.expect("section should be located");
        assert!(section.text.contains("広報部"));
        assert!(!section.text.contains("ナビ"));
    }

    #[test]
    fn no_keywords_no_tables_yields_none() {
        let doc = parse("<html><body><p>ただの本文です。</p></body></html>");
        assert!(locate_contact_section(&doc, &Options::default()).is_none());
    }
}
