//! Contact-information extraction from press-release pages.
//!
//! Takes raw HTML of a press release and produces a structured record
//! holding the publishing company, a named contact person, an email
//! address, and a phone number, together with a confidence score and
//! per-field provenance. Extraction is heuristic and layered: a
//! contact section is located first, then each field runs through an
//! ordered cascade of strategies from structural DOM lookups down to
//! full-text regex fallbacks, stopping at the first accepted match.
//!
//! Fetching is the caller's concern. Single documents go through
//! [`process_document`]; batches of locators plus a [`PageFetcher`]
//! go through [`process_batch`], which isolates per-document failures
//! so one bad page never aborts the run.
//!
//! ```rust
//! use press_contacts::process_document;
//!
//! let html = r#"<html><head><title>発表｜株式会社サンプルのプレスリリース</title></head>
//! <body><main><div><h3>本件に関するお問い合わせ</h3>
//! <p>TEL: 03-1234-5678 メール: pr@sample.co.jp</p></div></main></body></html>"#;
//!
//! let record = process_document(html, "https://news.example.net/1");
//! assert_eq!(record.company_name.as_deref(), Some("株式会社サンプル"));
//! assert_eq!(record.email.as_deref(), Some("pr@sample.co.jp"));
//! assert_eq!(record.phone.as_deref(), Some("03-1234-5678"));
//! assert!(record.confidence_score > 0.8);
//! ```

pub mod dom;
mod error;
pub mod fields;
mod normalize;
mod obfuscation;
mod observer;
mod options;
pub mod patterns;
mod pipeline;
mod record;
mod scoring;
mod section;
mod sink;

pub use error::{Error, Result};
pub use normalize::normalize;
pub use obfuscation::decode_email_obfuscation;
pub use observer::{ExtractionObserver, NoopObserver, TracingObserver};
pub use options::{FailurePolicy, Options, StrategyWeights};
pub use pipeline::{
    process_batch, process_batch_with, process_document, process_document_with,
    process_document_with_options, PageFetcher,
};
pub use record::{ExtractedRecord, ExtractionTrace, FieldTrace, Strategy};
pub use scoring::confidence;
pub use section::{locate_contact_section, DocumentSection};
pub use sink::{CsvSink, JsonLinesSink, RecordSink};
