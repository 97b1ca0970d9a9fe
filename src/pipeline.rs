//! Document and batch processing.
//!
//! `process_document` is the core entry point: parse, locate the
//! contact section, run the four field cascades, score. It is total
//! over its input; unparseable or empty HTML produces an empty record,
//! never an error. Batch processing adds fetching (via a caller
//! supplied [`PageFetcher`]), a per-document failure boundary, and
//! confidence filtering.

use url::Url;

use crate::dom;
use crate::error::Result;
use crate::fields::{company, email, person, phone};
use crate::normalize::normalize;
use crate::observer::{ExtractionObserver, NoopObserver};
use crate::options::{FailurePolicy, Options};
use crate::record::ExtractedRecord;
use crate::scoring::confidence;
use crate::section::locate_contact_section;

/// Source of page bodies for batch processing.
///
/// Implemented for any `Fn(&str) -> Result<String>`, so tests and
/// callers can pass a closure over a map, a file reader, or an HTTP
/// client.
pub trait PageFetcher {
    /// Fetch the HTML body for a document locator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Fetch`] when the body cannot be
    /// retrieved; batch processing applies the configured
    /// [`FailurePolicy`].
    fn fetch(&self, locator: &str) -> Result<String>;
}

impl<F> PageFetcher for F
where
    F: Fn(&str) -> Result<String>,
{
    fn fetch(&self, locator: &str) -> Result<String> {
        self(locator)
    }
}

/// Extract a contact record from one HTML document with default
/// options.
#[must_use]
pub fn process_document(html: &str, source_locator: &str) -> ExtractedRecord {
    process_document_with(html, source_locator, &Options::default(), &NoopObserver)
}

/// Extract a contact record from one HTML document.
#[must_use]
pub fn process_document_with_options(
    html: &str,
    source_locator: &str,
    options: &Options,
) -> ExtractedRecord {
    process_document_with(html, source_locator, options, &NoopObserver)
}

/// Extract a contact record, reporting milestones to an observer.
#[must_use]
pub fn process_document_with(
    html: &str,
    source_locator: &str,
    options: &Options,
    observer: &dyn ExtractionObserver,
) -> ExtractedRecord {
    observer.document_started(source_locator);

    let doc = dom::parse(html);
    let section = locate_contact_section(&doc, options);
    observer.section_located(
        source_locator,
        section.as_ref().and_then(|s| s.keyword.as_deref()),
    );

    let full_text = normalize(&doc.select("body").text());
    let denylist = effective_denylist(source_locator, options);

    let mut record = ExtractedRecord::new(source_locator);

    if let Some((name, trace)) = company::extract(&doc, section.as_ref(), &full_text, options) {
        observer.field_resolved(source_locator, "company", trace.strategy, &name);
        record.company_name = Some(name);
        record.trace.company = Some(trace);
    }
    if let Some((name, trace)) = person::extract(section.as_ref(), &full_text, options) {
        observer.field_resolved(source_locator, "person", trace.strategy, &name);
        record.contact_person = Some(name);
        record.trace.person = Some(trace);
    }
    if let Some((address, trace)) =
        email::extract(&doc, section.as_ref(), &full_text, &denylist, options)
    {
        observer.field_resolved(source_locator, "email", trace.strategy, &address);
        record.email = Some(address);
        record.trace.email = Some(trace);
    }
    if let Some((number, trace)) = phone::extract(&doc, section.as_ref(), &full_text, options) {
        observer.field_resolved(source_locator, "phone", trace.strategy, &number);
        record.phone = Some(number);
        record.trace.phone = Some(trace);
    }

    record.confidence_score = confidence(&record.trace, &options.weights);
    observer.document_finished(&record);
    record
}

/// Process a batch of documents with default options.
#[must_use]
pub fn process_batch<S, F>(locators: &[S], fetcher: &F) -> Vec<ExtractedRecord>
where
    S: AsRef<str>,
    F: PageFetcher,
{
    process_batch_with(locators, fetcher, &Options::default(), &NoopObserver)
}

/// Process a batch of documents.
///
/// Each document is fetched and extracted inside its own failure
/// boundary: one bad document never aborts the batch. Fetch failures
/// follow `options.failure_policy`; failure placeholders are kept even
/// below `min_confidence` so the output stays accountable for every
/// requested document.
#[must_use]
pub fn process_batch_with<S, F>(
    locators: &[S],
    fetcher: &F,
    options: &Options,
    observer: &dyn ExtractionObserver,
) -> Vec<ExtractedRecord>
where
    S: AsRef<str>,
    F: PageFetcher,
{
    let mut records = Vec::with_capacity(locators.len());
    for locator in locators {
        let locator = locator.as_ref();
        match fetcher.fetch(locator) {
            Ok(html) => {
                let record = process_document_with(&html, locator, options, observer);
                if record.confidence_score >= options.min_confidence {
                    records.push(record);
                }
            }
            Err(err) => {
                observer.fetch_failed(locator, &err);
                match options.failure_policy {
                    FailurePolicy::EmptyRecord => records.push(ExtractedRecord::new(locator)),
                    FailurePolicy::Skip => {}
                }
            }
        }
    }
    records
}

/// The configured denylist plus the source document's own host, so a
/// listing site's own addresses are never reported as the publisher's.
fn effective_denylist(source_locator: &str, options: &Options) -> Vec<String> {
    let mut denylist = options.email_denylist.clone();
    if let Ok(url) = Url::parse(source_locator) {
        if let Some(host) = url.host_str() {
            denylist.push(host.trim_start_matches("www.").to_string());
        }
    }
    denylist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const PAGE: &str = r#"<html><head>
        <title>新製品発表｜株式会社サンプルのプレスリリース</title>
        </head><body><main>
        <p>本文です。</p>
        <div><h3>本件に関するお問い合わせ</h3>
        <p>広報担当: 山田太郎</p>
        <p>TEL: 03-1234-5678 メール: pr@sample.co.jp</p></div>
        </main></body></html>"#;

    #[test]
    fn full_page_yields_all_fields() {
        let record = process_document(PAGE, "https://release-site.example.net/1");
        assert_eq!(record.company_name.as_deref(), Some("株式会社サンプル"));
        assert_eq!(record.contact_person.as_deref(), Some("山田太郎"));
        assert_eq!(record.email.as_deref(), Some("pr@sample.co.jp"));
        assert_eq!(record.phone.as_deref(), Some("03-1234-5678"));
        assert!(record.confidence_score > 0.7);
    }

    #[test]
    fn empty_html_yields_empty_record() {
        let record = process_document("", "doc-1");
        assert!(record.is_empty());
        assert_eq!(record.confidence_score, 0.0);
        assert_eq!(record.source_locator, "doc-1");
    }

    #[test]
    fn source_host_joins_the_denylist() {
        let html = r#"<body><p>連絡: info@release-site.jp / pr@publisher.jp</p></body>"#;
        let record = process_document(html, "https://www.release-site.jp/release/9");
        assert_eq!(record.email.as_deref(), Some("pr@publisher.jp"));
    }

    #[test]
    fn non_url_locator_adds_no_host() {
        let denylist = effective_denylist("doc-42", &Options::default());
        assert_eq!(denylist, Options::default().email_denylist);
    }

    #[test]
    fn batch_keeps_failure_placeholders() {
        let fetcher = |locator: &str| -> crate::Result<String> {
            if locator.ends_with("bad") {
                Err(Error::Fetch("boom".to_string()))
            } else {
                Ok(PAGE.to_string())
            }
        };
        let options = Options {
            min_confidence: 0.5,
            ..Options::default()
        };
        let records = process_batch_with(
            &["https://a.example.net/ok", "https://a.example.net/bad"],
            &fetcher,
            &options,
            &NoopObserver,
        );
        assert_eq!(records.len(), 2);
        assert!(!records[0].is_empty());
        assert!(records[1].is_empty());
        assert_eq!(records[1].source_locator, "https://a.example.net/bad");
    }

    #[test]
    fn batch_skip_policy_omits_failures() {
        let fetcher =
            |_: &str| -> crate::Result<String> { Err(Error::Fetch("down".to_string())) };
        let options = Options {
            failure_policy: FailurePolicy::Skip,
            ..Options::default()
        };
        let records = process_batch_with(&["a", "b"], &fetcher, &options, &NoopObserver);
        assert!(records.is_empty());
    }

    #[test]
    fn batch_filters_low_confidence_extractions() {
        let fetcher = |_: &str| -> crate::Result<String> {
            Ok("<body><p>中身のないページ</p></body>".to_string())
        };
        let options = Options {
            min_confidence: 0.5,
            ..Options::default()
        };
        let records = process_batch_with(&["doc-1"], &fetcher, &options, &NoopObserver);
        assert!(records.is_empty());
    }
}
