//! Email obfuscation decoding.
//!
//! Press releases frequently disguise addresses ("pr[at]company[dot]jp",
//! full-width `＠`, HTML entities) to evade harvesting. The decoder
//! rewrites the common forms back to `@`/`.` so the email pattern set
//! can match. It must run before email matching.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Ordered substitution rules. The bracketed forms come before the
/// bare-word forms so that "contact [at] host dot jp" decodes in one
/// pass without the bare rules corrupting the bracketed spans first.
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)\s*[\[(【［（]\s*at\s*[\])】］）]\s*").expect("bracketed at"),
            "@",
        ),
        (
            Regex::new(r"(?i)\s*[\[(【［（]\s*dot\s*[\])】］）]\s*").expect("bracketed dot"),
            ".",
        ),
        (Regex::new(r"＠|&#0*64;").expect("entity at"), "@"),
        (Regex::new(r"．|&#0*46;").expect("entity dot"), "."),
        (
            Regex::new(r"(?i)(\w)\s+at\s+(\w)").expect("bare at"),
            "$1@$2",
        ),
        (
            Regex::new(r"(?i)(\w)\s+dot\s+(\w)").expect("bare dot"),
            "$1.$2",
        ),
    ]
});

/// Rewrite common email-obfuscation tokens back to `@` and `.`.
///
/// ```rust
/// use press_contacts::decode_email_obfuscation;
///
/// let decoded = decode_email_obfuscation("name[at]example[dot]com");
/// assert!(decoded.contains("name@example.com"));
/// ```
#[must_use]
pub fn decode_email_obfuscation(text: &str) -> String {
    let mut decoded = text.to_string();
    for (pattern, replacement) in RULES.iter() {
        decoded = pattern.replace_all(&decoded, *replacement).into_owned();
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_bracketed_tokens() {
        assert_eq!(
            decode_email_obfuscation("name[at]example[dot]com"),
            "name@example.com"
        );
        assert_eq!(
            decode_email_obfuscation("name (at) example (dot) com"),
            "name@example.com"
        );
        assert_eq!(
            decode_email_obfuscation("pr【at】company.jp"),
            "pr@company.jp"
        );
    }

    #[test]
    fn decodes_fullwidth_and_entities() {
        assert_eq!(decode_email_obfuscation("info＠company．jp"), "info@company.jp");
        assert_eq!(
            decode_email_obfuscation("info&#64;company&#46;jp"),
            "info@company.jp"
        );
    }

    #[test]
    fn decodes_bare_words_between_word_characters() {
        assert_eq!(
            decode_email_obfuscation("press at example dot com"),
            "press@example.com"
        );
    }

    #[test]
    fn bracketed_forms_apply_before_bare_words() {
        // The [at] span must not be half-eaten by the bare-word rule.
        assert_eq!(
            decode_email_obfuscation("a [at] b [dot] c"),
            "a@b.c"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(decode_email_obfuscation("already@fine.jp"), "already@fine.jp");
        assert_eq!(decode_email_obfuscation(""), "");
    }
}
