//! Batch processing and persistence behavior.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use press_contacts::{
    process_batch, process_batch_with, CsvSink, Error, ExtractedRecord, ExtractionObserver,
    FailurePolicy, NoopObserver, Options, RecordSink, Result, TracingObserver,
};

fn page(company: &str, email: &str) -> String {
    format!(
        r#"<html><body><main><div><h3>本件に関するお問い合わせ</h3>
        <p>{company} 広報部 TEL: 03-1234-5678 メール: {email}</p></div></main></body></html>"#
    )
}

fn fixture_fetcher() -> impl Fn(&str) -> Result<String> {
    let pages: HashMap<String, String> = HashMap::from([
        ("https://hub.jp/1".to_string(), page("株式会社アルファ", "pr@alpha.jp")),
        ("https://hub.jp/3".to_string(), page("株式会社ガンマ", "pr@gamma.jp")),
    ]);
    move |locator: &str| {
        pages
            .get(locator)
            .cloned()
            .ok_or_else(|| Error::Fetch(format!("no page for {locator}")))
    }
}

#[test]
fn failing_middle_fetch_still_yields_three_records() {
    let locators = ["https://hub.jp/1", "https://hub.jp/2", "https://hub.jp/3"];
    let records = process_batch(&locators, &fixture_fetcher());

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].company_name.as_deref(), Some("株式会社アルファ"));
    assert!(records[1].is_empty());
    assert_eq!(records[1].source_locator, "https://hub.jp/2");
    assert_eq!(records[2].company_name.as_deref(), Some("株式会社ガンマ"));
}

#[test]
fn skip_policy_drops_failed_documents() {
    let locators = ["https://hub.jp/1", "https://hub.jp/2", "https://hub.jp/3"];
    let options = Options {
        failure_policy: FailurePolicy::Skip,
        ..Options::default()
    };
    let records = process_batch_with(&locators, &fixture_fetcher(), &options, &NoopObserver);

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| !r.is_empty()));
}

#[test]
fn confidence_threshold_filters_extractions_but_not_placeholders() {
    let fetcher = |locator: &str| -> Result<String> {
        if locator == "empty" {
            Ok("<body><p>中身がありません</p></body>".to_string())
        } else {
            Err(Error::Fetch("unreachable".to_string()))
        }
    };
    let options = Options {
        min_confidence: 0.5,
        ..Options::default()
    };
    let records = process_batch_with(&["empty", "down"], &fetcher, &options, &NoopObserver);

    // The empty extraction is filtered; the fetch-failure placeholder
    // stays so the batch remains accountable for the document.
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source_locator, "down");
}

#[test]
fn batch_results_stream_into_a_csv_sink() {
    let locators = ["https://hub.jp/1", "https://hub.jp/3"];
    let records = process_batch(&locators, &fixture_fetcher());

    let mut sink = CsvSink::new(Vec::new());
    for record in &records {
        sink.write_record(record).unwrap();
    }
    sink.finish().unwrap();

    let out = String::from_utf8(sink.into_inner()).unwrap();
    let mut lines = out.lines();
    assert!(lines.next().unwrap().starts_with("source_locator,"));
    assert!(out.contains("pr@alpha.jp"));
    assert!(out.contains("株式会社ガンマ"));
    assert_eq!(out.lines().count(), 3);
}

#[derive(Default)]
struct CountingObserver {
    started: AtomicUsize,
    finished: AtomicUsize,
    failed: AtomicUsize,
}

impl ExtractionObserver for CountingObserver {
    fn document_started(&self, _locator: &str) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    fn document_finished(&self, _record: &ExtractedRecord) {
        self.finished.fetch_add(1, Ordering::Relaxed);
    }

    fn fetch_failed(&self, _locator: &str, _error: &Error) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn observer_sees_every_document() {
    let locators = ["https://hub.jp/1", "https://hub.jp/2", "https://hub.jp/3"];
    let observer = CountingObserver::default();
    let records =
        process_batch_with(&locators, &fixture_fetcher(), &Options::default(), &observer);

    assert_eq!(records.len(), 3);
    assert_eq!(observer.started.load(Ordering::Relaxed), 2);
    assert_eq!(observer.finished.load(Ordering::Relaxed), 2);
    assert_eq!(observer.failed.load(Ordering::Relaxed), 1);
}

#[test]
fn tracing_observer_logs_without_affecting_results() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let locators = ["https://hub.jp/1", "https://hub.jp/2"];
    let records = process_batch_with(
        &locators,
        &fixture_fetcher(),
        &Options::default(),
        &TracingObserver,
    );
    assert_eq!(records.len(), 2);
}

#[test]
fn closure_fetchers_can_borrow_surrounding_state() {
    let body = page("株式会社デルタ", "pr@delta.jp");
    let fetcher = |_: &str| -> Result<String> { Ok(body.clone()) };
    let records: Vec<ExtractedRecord> = process_batch(&["https://hub.jp/9"], &fetcher);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].email.as_deref(), Some("pr@delta.jp"));
}
