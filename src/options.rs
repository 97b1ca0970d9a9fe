//! Configuration options for contact extraction.
//!
//! The ordered keyword lists and strategy weights are data, not code:
//! porting the extractor to another press-release site means replacing
//! these defaults, not adding code paths. Defaults target a Japanese
//! press-release listing site and its markup conventions.

/// What to do with a document whose fetch failed during batch
/// processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Emit an empty record (all fields unset, score 0.0) so the batch
    /// result stays aligned with the requested documents.
    #[default]
    EmptyRecord,
    /// Log the failure and omit the document from the results.
    Skip,
}

/// Reliability weights per field and strategy tier.
///
/// These are manually tuned constants inherited from earlier revisions
/// of the extraction heuristics. Treat them as tunable defaults, not
/// guaranteed semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyWeights {
    /// Flat contribution of a present company name to the document
    /// score, regardless of the tier that matched. Company presence is
    /// treated as a strong correctness signal.
    pub company_presence: f64,

    /// Company found via a dedicated structural element.
    pub company_structural: f64,
    /// Company from a site-name metadata tag.
    pub company_metadata: f64,
    /// Company parsed out of the document title.
    pub company_title: f64,
    /// Company from embedded JSON-LD.
    pub company_structured: f64,
    /// Company from a legal-entity regex over free text.
    pub company_fulltext: f64,

    /// Email from a labeled table row.
    pub email_table: f64,
    /// Email from a list item.
    pub email_list: f64,
    /// Email from a label-anchored text window.
    pub email_labeled: f64,
    /// Email from an unrestricted full-text scan.
    pub email_fulltext: f64,

    /// Phone from a labeled table row or list item.
    pub phone_table: f64,
    /// Phone from a label-anchored text match.
    pub phone_labeled: f64,
    /// Phone from a bare-pattern full-text scan.
    pub phone_fulltext: f64,

    /// Person from a label-anchored pattern.
    pub person_labeled: f64,
    /// Person from a name-plus-honorific pattern.
    pub person_honorific: f64,
    /// Person from the full-text fallback pass.
    pub person_fulltext: f64,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            company_presence: 0.95,
            company_structural: 0.95,
            company_metadata: 0.85,
            company_title: 0.85,
            company_structured: 0.80,
            company_fulltext: 0.60,
            email_table: 0.95,
            email_list: 0.90,
            email_labeled: 0.85,
            email_fulltext: 0.75,
            phone_table: 0.95,
            phone_labeled: 0.85,
            phone_fulltext: 0.75,
            person_labeled: 0.70,
            person_honorific: 0.60,
            person_fulltext: 0.50,
        }
    }
}

/// Configuration for extraction behavior.
///
/// All fields are public. Use `Default::default()` for standard
/// settings and struct-update syntax to override:
///
/// ```rust
/// use press_contacts::Options;
///
/// let options = Options {
///     min_confidence: 0.3,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Records scoring below this threshold are dropped by batch
    /// processing. Default 0.0 (permissive).
    pub min_confidence: f64,

    /// How batch processing handles per-document fetch failures.
    pub failure_policy: FailurePolicy,

    /// Tokens that disqualify an email domain. The source document's
    /// own host is added automatically per document. Defaults cover
    /// the listing site itself and obvious placeholders.
    pub email_denylist: Vec<String>,

    /// Ordered contact-intent keywords used to locate the contact
    /// section. Position is priority.
    pub contact_keywords: Vec<String>,

    /// Ordered CSS selectors tried when narrowing to the main content
    /// region.
    pub content_selectors: Vec<String>,

    /// Keywords identifying an email-labeling table cell or list item
    /// (matched case-insensitively against normalized text).
    pub email_labels: Vec<String>,

    /// Keywords identifying a phone-labeling table cell or list item.
    pub phone_labels: Vec<String>,

    /// Suffixes stripped from a site-name metadata value before it is
    /// accepted as a company name.
    pub sitename_suffixes: Vec<String>,

    /// Marker identifying the host site's own copyright boilerplate.
    /// A keyword-anchored section candidate is rejected when its text
    /// contains this marker together with one of `site_tokens`.
    pub copyright_marker: String,

    /// Name tokens of the host site, used with `copyright_marker` to
    /// reject the site's shared footer as a contact section.
    pub site_tokens: Vec<String>,

    /// Per-tier reliability weights.
    pub weights: StrategyWeights,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_confidence: 0.0,
            failure_policy: FailurePolicy::EmptyRecord,
            email_denylist: vec![
                "prtimes".to_string(),
                "example".to_string(),
                "test".to_string(),
            ],
            contact_keywords: vec![
                "メディア関係者限定".to_string(),
                "本件に関するお問い合わせ".to_string(),
                "プレスリリースに関するお問い合わせ".to_string(),
                "報道関係者お問い合わせ先".to_string(),
                "広報担当".to_string(),
                "PR担当".to_string(),
                "取材依頼".to_string(),
                "問い合わせ先".to_string(),
                "お問い合わせ".to_string(),
                "連絡先".to_string(),
                "Contact".to_string(),
            ],
            content_selectors: vec![
                "main".to_string(),
                "article".to_string(),
                ".content".to_string(),
                ".main-content".to_string(),
                ".article-content".to_string(),
                ".release-content".to_string(),
                ".press-release".to_string(),
            ],
            email_labels: vec![
                "メール".to_string(),
                "e-mail".to_string(),
                "email".to_string(),
                "mail".to_string(),
            ],
            phone_labels: vec![
                "tel".to_string(),
                "電話".to_string(),
                "℡".to_string(),
                "phone".to_string(),
            ],
            sitename_suffixes: vec![
                "のプレスリリース".to_string(),
                "｜PR TIMES".to_string(),
                "| PR TIMES".to_string(),
            ],
            copyright_marker: "Copyright".to_string(),
            site_tokens: vec!["PR TIMES".to_string(), "prtimes".to_string()],
            weights: StrategyWeights::default(),
        }
    }
}
