//! Record types for extraction output.
//!
//! One [`ExtractedRecord`] is produced per input document, even when
//! nothing could be extracted. Fields are filled monotonically by the
//! extraction cascades: a higher-priority strategy runs earlier and
//! later tiers only fill gaps, so a populated field is never
//! overwritten.

use serde::{Deserialize, Serialize};

/// The strategy tier that produced a field value.
///
/// Ordered roughly by reliability: structural DOM lookups are the most
/// trustworthy, free-text regex scans over the whole document the
/// least. The scorer maps each tier to a configurable weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Dedicated HTML element (class/attribute, table cell, list item).
    Structural,
    /// Site metadata tag (e.g. og:site_name).
    Metadata,
    /// Pattern match against the document title.
    TitlePattern,
    /// Embedded JSON-LD structured data.
    StructuredData,
    /// Match inside the located contact section.
    SectionKeyword,
    /// Label-anchored window in free text.
    LabeledText,
    /// Unrestricted regex scan over the full document text.
    FullTextFallback,
}

impl Strategy {
    /// Short tag for logs and traces.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Metadata => "metadata",
            Self::TitlePattern => "title-pattern",
            Self::StructuredData => "structured-data",
            Self::SectionKeyword => "section-keyword",
            Self::LabeledText => "labeled-text",
            Self::FullTextFallback => "full-text-fallback",
        }
    }
}

/// Which strategy produced a field value, and the reliability weight
/// that tier carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldTrace {
    /// Winning strategy tier.
    pub strategy: Strategy,
    /// Reliability weight of that tier, in [0.0, 1.0].
    pub weight: f64,
}

impl FieldTrace {
    /// Create a trace entry.
    #[must_use]
    pub fn new(strategy: Strategy, weight: f64) -> Self {
        Self { strategy, weight }
    }
}

/// Per-field provenance of an extraction run.
///
/// A fixed-shape struct rather than a string-keyed map so the
/// extractor set gets compile-time field coverage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionTrace {
    /// How the company name was found, if it was.
    pub company: Option<FieldTrace>,
    /// How the contact person was found, if they were.
    pub person: Option<FieldTrace>,
    /// How the email address was found, if it was.
    pub email: Option<FieldTrace>,
    /// How the phone number was found, if it was.
    pub phone: Option<FieldTrace>,
}

impl ExtractionTrace {
    /// True when no field was resolved by any strategy.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.person.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

/// One extracted contact record per processed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Identifier of the source document (usually its URL).
    pub source_locator: String,

    /// Publisher company name.
    pub company_name: Option<String>,

    /// Named contact person.
    pub contact_person: Option<String>,

    /// Contact email address, de-obfuscated and denylist-checked.
    pub email: Option<String>,

    /// Phone number normalized to hyphen-grouped form
    /// (e.g. `03-1234-5678`).
    pub phone: Option<String>,

    /// Document-level confidence in [0.0, 1.0]; 0.0 means nothing was
    /// extracted.
    pub confidence_score: f64,

    /// Which strategy resolved each field.
    pub trace: ExtractionTrace,
}

impl ExtractedRecord {
    /// Create an empty record for a source document.
    #[must_use]
    pub fn new(source_locator: impl Into<String>) -> Self {
        Self {
            source_locator: source_locator.into(),
            ..Self::default()
        }
    }

    /// True when no contact field was populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.contact_person.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}
