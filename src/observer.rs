//! Extraction progress observation.
//!
//! Batch callers want visibility into per-document progress without
//! the extractor depending on any particular sink. The pipeline calls
//! an [`ExtractionObserver`] at each milestone; every method has a
//! no-op default so implementors override only what they care about.

use tracing::{debug, info, warn};

use crate::record::{ExtractedRecord, Strategy};

/// Hooks invoked by the pipeline as a document moves through
/// extraction.
pub trait ExtractionObserver {
    /// A document is about to be processed.
    fn document_started(&self, locator: &str) {
        let _ = locator;
    }

    /// The contact section was located, or was not (`keyword` is the
    /// anchor that matched, when one did).
    fn section_located(&self, locator: &str, keyword: Option<&str>) {
        let _ = (locator, keyword);
    }

    /// A field was resolved by some strategy tier.
    fn field_resolved(&self, locator: &str, field: &str, strategy: Strategy, value: &str) {
        let _ = (locator, field, strategy, value);
    }

    /// Extraction finished and produced a record.
    fn document_finished(&self, record: &ExtractedRecord) {
        let _ = record;
    }

    /// A document could not be fetched during batch processing.
    fn fetch_failed(&self, locator: &str, error: &crate::Error) {
        let _ = (locator, error);
    }
}

/// Observer that does nothing. Used by the convenience entry points.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ExtractionObserver for NoopObserver {}

/// Observer that emits `tracing` events: debug for per-field detail,
/// info for record summaries, warn for fetch failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ExtractionObserver for TracingObserver {
    fn document_started(&self, locator: &str) {
        debug!(locator, "processing document");
    }

    fn section_located(&self, locator: &str, keyword: Option<&str>) {
        match keyword {
            Some(keyword) => debug!(locator, keyword, "contact section located"),
            None => debug!(locator, "no contact section, falling back to full text"),
        }
    }

    fn field_resolved(&self, locator: &str, field: &str, strategy: Strategy, value: &str) {
        debug!(locator, field, strategy = strategy.tag(), value, "field resolved");
    }

    fn document_finished(&self, record: &ExtractedRecord) {
        info!(
            locator = record.source_locator.as_str(),
            confidence = record.confidence_score,
            empty = record.is_empty(),
            "document processed"
        );
    }

    fn fetch_failed(&self, locator: &str, error: &crate::Error) {
        warn!(locator, %error, "fetch failed");
    }
}
