//! DOM operations adapter.
//!
//! A thin layer over `dom_query` giving the extractors a small, named
//! vocabulary for the handful of tree operations they need.

pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// All text content of a node and its descendants.
///
/// Returns `StrTendril`; convert with `.to_string()` only when owned
/// storage is needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Tag name of the first node in the selection, lowercase.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Attribute value, if present.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Class attribute, or the empty string.
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    get_attribute(sel, "class").unwrap_or_default()
}

/// Parent element.
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// True when the selection's tag is one of the given names.
#[must_use]
pub fn is_one_of_tags(sel: &Selection, tags: &[&str]) -> bool {
    tag_name(sel).is_some_and(|t| tags.contains(&t.as_str()))
}

/// Remove the selected elements from the tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Deep-copy a document. Used when a cascade needs to prune a tree
/// without disturbing the original.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}
