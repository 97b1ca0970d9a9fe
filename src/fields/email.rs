//! Email extraction cascade.
//!
//! Candidates pass through obfuscation decoding before matching and
//! through the domain denylist before acceptance. The denylist given
//! here already includes the source document's own host, so addresses
//! belonging to the listing site never survive.

use crate::dom::{Document, Selection};
use crate::normalize::normalize;
use crate::obfuscation::decode_email_obfuscation;
use crate::options::Options;
use crate::patterns::{EMAIL, EMAIL_LABEL, OBFUSCATION_HINT};
use crate::record::{FieldTrace, Strategy};
use crate::section::DocumentSection;

/// Characters scanned after an email label for the address itself.
const LABEL_WINDOW_CHARS: usize = 50;

/// Resolve the contact email address.
///
/// Tiers: labeled table rows, list items, label-anchored text windows,
/// then a bare scan over the contact section and the full text.
#[must_use]
pub fn extract(
    doc: &Document,
    section: Option<&DocumentSection>,
    full_text: &str,
    denylist: &[String],
    options: &Options,
) -> Option<(String, FieldTrace)> {
    let w = &options.weights;

    if let Some(email) = from_tables(doc, denylist, options) {
        return Some((email, FieldTrace::new(Strategy::Structural, w.email_table)));
    }
    if let Some(email) = from_list_items(doc, denylist) {
        return Some((email, FieldTrace::new(Strategy::Structural, w.email_list)));
    }
    for text in section.map(|s| s.text.as_str()).into_iter().chain([full_text]) {
        if let Some(email) = labeled_window(text, denylist) {
            return Some((email, FieldTrace::new(Strategy::LabeledText, w.email_labeled)));
        }
    }
    if let Some(text) = section.map(|s| s.text.as_str()) {
        if let Some(email) = bare_scan(text, denylist) {
            return Some((
                email,
                FieldTrace::new(Strategy::SectionKeyword, w.email_fulltext),
            ));
        }
    }
    if let Some(email) = bare_scan(full_text, denylist) {
        return Some((
            email,
            FieldTrace::new(Strategy::FullTextFallback, w.email_fulltext),
        ));
    }
    None
}

/// Rows whose first cells carry an email label; the whole row is then
/// scanned so "Email" and the address may share a cell or not.
fn from_tables(doc: &Document, denylist: &[String], options: &Options) -> Option<String> {
    for node in doc.select("tr").nodes() {
        let row = Selection::from(*node);
        let has_label = row.select("th, td").nodes().iter().any(|cell| {
            let cell_text = normalize(&Selection::from(*cell).text()).to_lowercase();
            options.email_labels.iter().any(|l| cell_text.contains(l.as_str()))
        });
        if !has_label {
            continue;
        }
        if let Some(email) = bare_scan(&normalize(&row.text()), denylist) {
            return Some(email);
        }
    }
    None
}

/// List items carrying an address or an obfuscation token.
fn from_list_items(doc: &Document, denylist: &[String]) -> Option<String> {
    for node in doc.select("li").nodes() {
        let item_text = normalize(&Selection::from(*node).text());
        if !item_text.contains('@') && !OBFUSCATION_HINT.is_match(&item_text) {
            continue;
        }
        if let Some(email) = bare_scan(&item_text, denylist) {
            return Some(email);
        }
    }
    None
}

/// Scan a bounded window after each email label.
fn labeled_window(text: &str, denylist: &[String]) -> Option<String> {
    for label in EMAIL_LABEL.find_iter(text) {
        let window = window_after(text, label.end());
        if let Some(email) = bare_scan(window, denylist) {
            return Some(email);
        }
    }
    None
}

/// First address in the decoded text that clears the denylist.
fn bare_scan(text: &str, denylist: &[String]) -> Option<String> {
    let decoded = decode_email_obfuscation(text);
    EMAIL
        .find_iter(&decoded)
        .map(|m| m.as_str().to_lowercase())
        .find(|email| !is_denied(email, denylist))
}

/// True when the address's domain part contains any denylist token.
pub(crate) fn is_denied(email: &str, denylist: &[String]) -> bool {
    let Some(domain) = email.split('@').nth(1) else {
        return true;
    };
    let domain = domain.to_lowercase();
    denylist
        .iter()
        .any(|token| domain.contains(&token.to_lowercase()))
}

fn window_after(text: &str, start: usize) -> &str {
    let tail = &text[start..];
    let cut = tail
        .char_indices()
        .nth(LABEL_WINDOW_CHARS)
        .map_or(tail.len(), |(i, _)| i);
    &tail[..cut]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    fn options_without_placeholder_deny() -> Options {
        Options {
            email_denylist: vec!["prtimes".to_string()],
            ..Options::default()
        }
    }

    fn extract_from(html: &str) -> Option<(String, FieldTrace)> {
        let doc = parse(html);
        let opts = options_without_placeholder_deny();
        let text = normalize(&doc.select("body").text());
        extract(&doc, None, &text, &opts.email_denylist, &opts)
    }

    #[test]
    fn labeled_table_row_wins() {
        let got = extract_from(
            r#"<body>
               <p>other@elsewhere.jp</p>
               <table><tr><th>Email</th><td>pr@alpha.co.jp</td></tr></table>
               </body>"#,
        );
        let (email, trace) = got.expect("email expected");
        assert_eq!(email, "pr@alpha.co.jp");
        assert_eq!(trace.strategy, Strategy::Structural);
        assert_eq!(trace.weight, 0.95);
    }

    #[test]
    fn obfuscated_list_item_is_decoded() {
        let got = extract_from("<body><ul><li>広報: press[at]beta[dot]jp</li></ul></body>");
        let (email, _) = got.expect("email expected");
        assert_eq!(email, "press@beta.jp");
    }

    #[test]
    fn label_window_bounds_the_scan() {
        let got = extract_from("<body><p>メール: contact@gamma.jp へどうぞ</p></body>");
        let (email, trace) = got.expect("email expected");
        assert_eq!(email, "contact@gamma.jp");
        assert_eq!(trace.strategy, Strategy::LabeledText);
    }

    #[test]
    fn denylisted_domains_are_skipped_for_later_candidates() {
        let got = extract_from("<body><p>info@prtimes.co.jp または pr@delta.jp</p></body>");
        let (email, trace) = got.expect("email expected");
        assert_eq!(email, "pr@delta.jp");
        assert_eq!(trace.strategy, Strategy::FullTextFallback);
    }

    #[test]
    fn all_candidates_denied_yields_none() {
        assert!(extract_from("<body><p>info@prtimes.jp</p></body>").is_none());
    }

    #[test]
    fn addresses_are_lowercased() {
        let got = extract_from("<body><p>PR@Epsilon.JP</p></body>");
        let (email, _) = got.expect("email expected");
        assert_eq!(email, "pr@epsilon.jp");
    }

    #[test]
    fn denylist_checks_domain_part_only() {
        let denylist = vec!["prtimes".to_string()];
        assert!(is_denied("a@prtimes.co.jp", &denylist));
        assert!(!is_denied("prtimes@other.jp", &denylist));
    }
}
