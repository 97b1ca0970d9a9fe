//! Compiled regex patterns for contact-field extraction.
//!
//! All patterns are compiled once at startup using `LazyLock`.
//! Within each field the patterns form an ordered set: position is
//! priority, and the extractors stop at the first accepted match.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Email Patterns
// =============================================================================

/// Matches a syntactically plausible email address.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("EMAIL regex")
});

/// Anchors a label-bounded window in which an email is expected.
pub static EMAIL_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:e-?mail|メール|mail)[\s:：]*").expect("EMAIL_LABEL regex")
});

/// Detects obfuscation tokens that mark a list item or cell as
/// carrying a disguised address.
pub static OBFUSCATION_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[\s*at\s*\]|\(\s*at\s*\)|＠|&#0*64;").expect("OBFUSCATION_HINT regex")
});

// =============================================================================
// Phone Patterns
// =============================================================================

/// Label-anchored phone capture; runs on normalized (half-width) text.
pub static PHONE_LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:tel|電話|℡|phone)[\s.:：]*([0-9+()\-\s]{10,20})")
        .expect("PHONE_LABELED regex")
});

/// Hyphen-separated domestic number, e.g. 03-1234-5678. ASCII word
/// boundaries so numbers adjoining kana or kanji still match.
pub static PHONE_HYPHEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)0\d{1,4}-\d{1,4}-\d{3,4}(?-u:\b)").expect("PHONE_HYPHEN regex")
});

/// Parenthesized area code, e.g. 03(1234)5678.
pub static PHONE_PAREN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)0\d{0,3}\(\d{1,4}\)\d{3,4}(?-u:\b)").expect("PHONE_PAREN regex")
});

/// International prefix form, e.g. +81-3-1234-5678.
pub static PHONE_INTL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+81[-\s]?\d{1,4}[-\s]?\d{1,4}[-\s]?\d{3,4}").expect("PHONE_INTL regex")
});

/// Bare 10-11 digit run starting with 0.
pub static PHONE_BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)0\d{9,10}(?-u:\b)").expect("PHONE_BARE regex")
});

// =============================================================================
// Person Patterns
// =============================================================================

/// A labeling keyword immediately followed by a name-shaped token.
pub static PERSON_LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:担当者?|広報担当|PR担当|取材担当|連絡先|問い合わせ先)[\s:：]*([一-龥ぁ-んァ-ヶー]{2,10})")
        .expect("PERSON_LABELED regex")
});

/// A two-token name followed by an honorific or "attention" marker.
pub static PERSON_HONORIFIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([一-龥]{2,4}\s[一-龥]{2,4})\s*(?:まで|宛|様|氏)").expect("PERSON_HONORIFIC regex")
});

// =============================================================================
// Company Patterns
// =============================================================================

/// Legal-entity prefix followed by a company token.
pub static COMPANY_PREFIXED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:株式会社|有限会社|合同会社|合資会社|合名会社)[^\s、。；;，,）)]{1,30}")
        .expect("COMPANY_PREFIXED regex")
});

/// Company token followed by a legal-entity suffix.
pub static COMPANY_SUFFIXED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\s、。；;，,（(]{1,30}(?:株式会社|有限会社|合同会社|合資会社|合名会社)")
        .expect("COMPANY_SUFFIXED regex")
});

/// English legal-entity suffixed name, e.g. "Alpha Inc.".
pub static COMPANY_EN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[A-Z][A-Za-z0-9&.\-]*(?:\s+[A-Z][A-Za-z0-9&.\-]*){0,3},?\s+(?:Inc\.?|Corp\.?|Corporation|Co\.,?\s*Ltd\.?|Ltd\.?|LLC|K\.K\.)",
    )
    .expect("COMPANY_EN regex")
});

/// Title-tail pattern naming the publishing company.
pub static TITLE_COMPANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[|｜]\s*(.+?)のプレスリリース").expect("TITLE_COMPANY regex")
});

// =============================================================================
// Structure / Cleaning Patterns
// =============================================================================

/// Matches class names of navigation chrome removed from the
/// whole-body fallback region.
pub static BOILERPLATE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(header|footer|nav|menu|sidebar)").expect("BOILERPLATE_CLASS regex")
});

/// Matches runs of whitespace for normalization.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));
