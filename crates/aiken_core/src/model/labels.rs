//! Canonical distractor label sequence and answer-line markers.
//!
//! # Responsibility
//! - Map answer letters to zero-based positions and back.
//! - Recognize the answer marker slug at the start of an item line.
//!
//! # Invariants
//! - The label sequence is `A..=Z`, computed once per process and never
//!   reassigned.
//! - Letter lookup is exact and case-sensitive; surrounding whitespace is
//!   never stripped.

use once_cell::sync::Lazy;

/// Marker prefix of the line that names the correct distractor letter.
pub const CORRECT_ANSWER_LINE_DETECTOR_SLUG: &str = "ANSWER: ";

const CORRECT_ANSWER_DETECTOR_SLUGS: &[&str] = &[CORRECT_ANSWER_LINE_DETECTOR_SLUG];

static CANONICAL_LABELS: Lazy<Vec<char>> = Lazy::new(|| ('A'..='Z').collect());

/// Returns the canonical label sequence `A, B, C, ..., Z`.
pub fn canonical_labels() -> &'static [char] {
    CANONICAL_LABELS.as_slice()
}

/// Returns the number of labels available for distractor positions.
pub fn label_capacity() -> usize {
    canonical_labels().len()
}

/// Returns the zero-based position of `key` in the canonical sequence.
///
/// `key` must be exactly one label character; `" B"`, `"b"` and `"BB"` all
/// return `None`.
pub fn label_index(key: &str) -> Option<usize> {
    let mut chars = key.chars();
    let letter = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    canonical_labels().iter().position(|label| *label == letter)
}

/// Returns the label assigned to position `index`, if the alphabet covers it.
pub fn label_at(index: usize) -> Option<char> {
    canonical_labels().get(index).copied()
}

/// Returns recognized answer marker slugs.
pub fn correct_answer_detector_slugs() -> &'static [&'static str] {
    CORRECT_ANSWER_DETECTOR_SLUGS
}

/// Extracts the answer key following a recognized marker slug.
///
/// The remainder is returned verbatim so that stray whitespace reaches
/// answer resolution and is reported there.
pub fn answer_key_from_line(line: &str) -> Option<&str> {
    correct_answer_detector_slugs()
        .iter()
        .find_map(|slug| line.strip_prefix(slug))
}

#[cfg(test)]
mod tests {
    use super::{
        answer_key_from_line, canonical_labels, label_at, label_capacity, label_index,
    };

    #[test]
    fn canonical_labels_cover_uppercase_alphabet() {
        let labels = canonical_labels();
        assert_eq!(labels.len(), 26);
        assert_eq!(labels.first(), Some(&'A'));
        assert_eq!(labels.last(), Some(&'Z'));
        assert_eq!(label_capacity(), 26);
    }

    #[test]
    fn canonical_labels_are_stable_across_calls() {
        let first = canonical_labels();
        let second = canonical_labels();
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn label_index_is_exact_and_case_sensitive() {
        assert_eq!(label_index("A"), Some(0));
        assert_eq!(label_index("B"), Some(1));
        assert_eq!(label_index("Z"), Some(25));
        assert_eq!(label_index("b"), None);
        assert_eq!(label_index(" B"), None);
        assert_eq!(label_index("B "), None);
        assert_eq!(label_index("AB"), None);
        assert_eq!(label_index(""), None);
    }

    #[test]
    fn label_at_inverts_label_index() {
        assert_eq!(label_at(2), Some('C'));
        assert_eq!(label_at(26), None);
    }

    #[test]
    fn answer_key_from_line_requires_exact_slug() {
        assert_eq!(answer_key_from_line("ANSWER: C"), Some("C"));
        assert_eq!(answer_key_from_line("ANSWER: C "), Some("C "));
        assert_eq!(answer_key_from_line("ANSWER:C"), None);
        assert_eq!(answer_key_from_line("answer: C"), None);
        assert_eq!(answer_key_from_line("A. Paris"), None);
    }
}
