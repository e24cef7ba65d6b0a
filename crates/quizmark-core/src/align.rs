//! Character-level alignment of a typed answer against the reference,
//! used to highlight which typed characters count as correct.
//!
//! Matching runs on the normalized texts (longest common subsequence),
//! but the mask is reported over the characters of the *original* typed
//! answer, position for position. When normalization removes punctuation
//! or collapses whitespace the two indexings drift apart, so highlights
//! after such a character can land one or more positions off. Renderers
//! rely on this exact behaviour; do not remap indices here.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::normalize::NormalizedText;

/// Match mask over the original characters of a typed answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    chars: Vec<char>,
    matched: Vec<bool>,
}

/// A maximal run of consecutive characters with the same match flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub matched: bool,
}

/// Align `user_answer` against `reference_answer`.
///
/// Returns one flag per character of `user_answer` as typed. If both
/// answers normalize to the same text every character is matched.
pub fn align(user_answer: &str, reference_answer: &str) -> Alignment {
    let chars: Vec<char> = user_answer.chars().collect();
    let user = NormalizedText::new(user_answer);
    let reference = NormalizedText::new(reference_answer);

    if user == reference {
        let matched = vec![true; chars.len()];
        return Alignment { chars, matched };
    }

    let lcs = lcs_user_positions(user.chars(), reference.chars());
    let matched = (0..chars.len()).map(|idx| lcs.contains(&idx)).collect();
    Alignment { chars, matched }
}

/// Positions in `user` that belong to one longest common subsequence
/// with `reference`.
fn lcs_user_positions(user: &[char], reference: &[char]) -> HashSet<usize> {
    let m = user.len();
    let n = reference.len();
    let mut dp = Grid::new(m + 1, n + 1);

    for i in 1..=m {
        for j in 1..=n {
            let value = if user[i - 1] == reference[j - 1] {
                dp.get(i - 1, j - 1) + 1
            } else {
                dp.get(i - 1, j).max(dp.get(i, j - 1))
            };
            dp.set(i, j, value);
        }
    }

    let mut positions = HashSet::with_capacity(dp.get(m, n));
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if user[i - 1] == reference[j - 1] {
            positions.insert(i - 1);
            i -= 1;
            j -= 1;
        } else if dp.get(i - 1, j) > dp.get(i, j - 1) {
            i -= 1;
        } else {
            // Ties step along the reference.
            j -= 1;
        }
    }

    positions
}

impl Alignment {
    /// One flag per original character.
    pub fn mask(&self) -> &[bool] {
        &self.matched
    }

    /// The original characters paired with their flags.
    pub fn chars(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.chars.iter().copied().zip(self.matched.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn matched_count(&self) -> usize {
        self.matched.iter().filter(|m| **m).count()
    }

    pub fn is_full_match(&self) -> bool {
        self.matched.iter().all(|m| *m)
    }

    /// Group consecutive characters sharing a flag.
    pub fn spans(&self) -> Vec<Span> {
        let mut spans: Vec<Span> = Vec::new();
        for (c, matched) in self.chars() {
            match spans.last_mut() {
                Some(span) if span.matched == matched => span.text.push(c),
                _ => spans.push(Span {
                    text: c.to_string(),
                    matched,
                }),
            }
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mask_string(alignment: &Alignment) -> String {
        alignment
            .mask()
            .iter()
            .map(|m| if *m { '+' } else { '-' })
            .collect()
    }

    #[test]
    fn equal_after_normalization_marks_everything() {
        let alignment = align("Hello World!", "hello world");
        assert_eq!(alignment.len(), 12);
        assert!(alignment.is_full_match());
        assert_eq!(alignment.matched_count(), 12);
    }

    #[test]
    fn single_substitution() {
        assert_eq!(mask_string(&align("bat", "cat")), "-++");
        assert_eq!(mask_string(&align("cat", "cart")), "+++");
    }

    #[test]
    fn extra_characters_are_unmatched() {
        assert_eq!(mask_string(&align("caxt", "cat")), "++-+");
    }

    #[test]
    fn empty_inputs() {
        assert!(align("", "anything").is_empty());
        assert_eq!(mask_string(&align("abc", "")), "---");
        assert!(align("", "").is_empty());
    }

    #[test]
    fn tie_prefers_reference_axis() {
        // "ab" vs "ba": the LCS has length 1. Ties step j first, so the
        // backtrack keeps the 'b' of the user text rather than the 'a'.
        assert_eq!(mask_string(&align("ab", "ba")), "-+");
    }

    #[test]
    fn mask_is_indexed_by_original_position() {
        // Normalized user text is "a bx"; its matched positions 0..=2 are
        // applied to the original "A,  bx" index for index.
        let alignment = align("A,  bx", "a b");
        assert_eq!(mask_string(&alignment), "+++---");
    }

    #[test]
    fn uppercase_input_is_matched_case_insensitively() {
        assert_eq!(mask_string(&align("CAT", "bat")), "-++");
    }

    #[test]
    fn spans_group_runs() {
        // Backtracking starts at the end, so the trailing "at" is kept.
        let spans = align("bat hat", "cat").spans();
        assert_eq!(
            spans,
            vec![
                Span {
                    text: "bat h".into(),
                    matched: false
                },
                Span {
                    text: "at".into(),
                    matched: true
                },
            ]
        );
    }
}
