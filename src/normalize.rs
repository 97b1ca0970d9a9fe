//! Text normalization.
//!
//! Every downstream matcher runs over normalized text: full-width
//! alphanumerics and punctuation are folded to their half-width
//! equivalents, whitespace runs collapse to single spaces, and the
//! ends are trimmed. The function is pure, total, and idempotent.

use crate::patterns::WHITESPACE;

/// Canonicalize a string for pattern matching.
///
/// Folds the full-width ASCII block (`Ａ`→`A`, `１`→`1`, `－`→`-`,
/// `＠`→`@`) and the ideographic space, collapses whitespace and
/// trims. Normalizing an already-normalized string returns it
/// unchanged.
///
/// ```rust
/// use press_contacts::normalize;
///
/// assert_eq!(normalize("ＴＥＬ：０３－１２３４"), "TEL:03-1234");
/// assert_eq!(normalize("  a\n\n b "), "a b");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let folded: String = text.chars().map(fold_width).collect();
    WHITESPACE.replace_all(&folded, " ").trim().to_string()
}

/// Fold one full-width character to its half-width equivalent.
///
/// The full-width forms block U+FF01..U+FF5E mirrors printable ASCII
/// at a fixed offset; the ideographic space U+3000 maps to a plain
/// space. Everything else passes through untouched (katakana `ー` is
/// deliberately not a hyphen).
fn fold_width(c: char) -> char {
    match c {
        '\u{FF01}'..='\u{FF5E}' => {
            let folded = (c as u32) - 0xFEE0;
            char::from_u32(folded).unwrap_or(c)
        }
        '\u{3000}' => ' ',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_fullwidth_digits_and_punctuation() {
        assert_eq!(normalize("０１２３４５６７８９"), "0123456789");
        assert_eq!(normalize("（０３）"), "(03)");
        assert_eq!(normalize("ｉｎｆｏ＠ｅｘａｍｐｌｅ．ｃｏｍ"), "info@example.com");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("  hello \t\n world  "), "hello world");
        assert_eq!(normalize("a\u{3000}b"), "a b");
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "ＴＥＬ：０３－１２３４－５６７８",
            "  spaced   out  ",
            "お問い合わせ：広報部",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn leaves_japanese_text_intact() {
        assert_eq!(normalize("株式会社サンプル"), "株式会社サンプル");
        // Katakana prolonged-sound mark is not a hyphen.
        assert_eq!(normalize("マーケティング"), "マーケティング");
    }

    #[test]
    fn total_over_empty_input() {
        assert_eq!(normalize(""), "");
    }
}
