//! Text normalization applied before any comparison.

use std::fmt;

/// Punctuation removed by [`normalize`]. Nothing outside this set is stripped.
pub const STRIPPED_PUNCTUATION: [char; 13] = [
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '—',
];

/// Canonicalize text for comparison.
///
/// Lowercases, drops [`STRIPPED_PUNCTUATION`], collapses whitespace runs to
/// a single space and trims both ends. Idempotent; `""` maps to `""`.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A normalized answer, ready to be compared character by character.
///
/// Never persisted; built fresh from the raw text each time it is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
    chars: Vec<char>,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let chars = text.chars().collect();
        Self { text, chars }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Hello, World!"), "hello world");
        assert_eq!(normalize("(a) [b] {c}; d: e? f."), "a b c d e f");
    }

    #[test]
    fn strips_em_dash_but_not_hyphen() {
        assert_eq!(normalize("well—known"), "wellknown");
        assert_eq!(normalize("well-known"), "well-known");
        assert_eq!(normalize("it's \"quoted\""), "it's \"quoted\"");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(normalize("  a \t\n b   c  "), "a b c");
        assert_eq!(normalize("a . b"), "a b");
    }

    #[test]
    fn keeps_diacritics() {
        assert_eq!(normalize("Xuất Sắc!"), "xuất sắc");
    }

    #[test]
    fn empty_and_punctuation_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("?!…"), "…");
        assert_eq!(normalize(".,!?;:()[]{}—"), "");
    }

    #[test]
    fn idempotent() {
        for s in ["Hello  World!", "  (x) — y ", "ĐÁP ÁN: Đúng.", ""] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn normalized_text_counts_chars() {
        let text = NormalizedText::new("Đúng rồi!");
        assert_eq!(text.len(), 8);
        assert!(!text.is_empty());
        assert!(NormalizedText::new(" ... ").is_empty());
        assert_eq!(text.to_string(), "đúng rồi");
    }
}
