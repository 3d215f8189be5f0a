//! Ordered distractor container with positional label resolution.
//!
//! # Responsibility
//! - Keep distractors in append order (presentation order).
//! - Resolve an answer letter to the text at the matching position.
//!
//! # Invariants
//! - Entries are never reordered or removed after append.
//! - Labels are positional: index `i` maps to `canonical_labels()[i]`.

use crate::model::distractor::Distractor;
use crate::model::labels::{label_at, label_index};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Append-only ordered collection of distractors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistractorCollection {
    items: Vec<Distractor>,
}

impl DistractorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one distractor and returns the new count.
    ///
    /// Never fails; exceeding the label alphabet is reported by the owning
    /// item at export time.
    pub fn append(&mut self, distractor: Distractor) -> usize {
        self.items.push(distractor);
        self.items.len()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Distractor> {
        self.items.iter()
    }

    /// Iterates distractors with their position-derived label.
    ///
    /// Positions past the end of the alphabet yield `None`.
    pub fn labeled(&self) -> impl Iterator<Item = (Option<char>, &Distractor)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, distractor)| (label_at(index), distractor))
    }

    /// Returns the text of the distractor at the position named by `key`.
    ///
    /// # Errors
    /// - `UnknownLabel` when `key` is not one canonical label letter.
    /// - `LabelOutOfRange` when no distractor occupies that position.
    pub fn resolve_correct_answer_value(
        &self,
        key: &str,
    ) -> Result<&str, DistractorCollectionError> {
        let index =
            label_index(key).ok_or_else(|| DistractorCollectionError::UnknownLabel(key.into()))?;
        self.items
            .get(index)
            .map(Distractor::text)
            .ok_or_else(|| DistractorCollectionError::LabelOutOfRange {
                label: key.to_string(),
                index,
                count: self.items.len(),
            })
    }

    /// Exports distractor texts in presentation order, without labels.
    pub fn to_texts(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|distractor| distractor.text().to_string())
            .collect()
    }
}

impl FromIterator<Distractor> for DistractorCollection {
    fn from_iter<T: IntoIterator<Item = Distractor>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Answer-letter resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistractorCollectionError {
    /// Key is not exactly one letter of `A..Z`.
    UnknownLabel(String),
    /// Key is a valid label but the collection is shorter than its position.
    LabelOutOfRange {
        label: String,
        index: usize,
        count: usize,
    },
}

impl Display for DistractorCollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLabel(key) => write!(f, "answer key is not a distractor label: `{key}`"),
            Self::LabelOutOfRange {
                label,
                index,
                count,
            } => write!(
                f,
                "answer key `{label}` points at position {index} but only {count} distractors exist"
            ),
        }
    }
}

impl Error for DistractorCollectionError {}

#[cfg(test)]
mod tests {
    use super::{DistractorCollection, DistractorCollectionError};
    use crate::model::distractor::Distractor;

    fn capitals() -> DistractorCollection {
        ["Paris", "London", "Berlin"]
            .into_iter()
            .map(Distractor::from)
            .collect()
    }

    #[test]
    fn append_reports_new_count() {
        let mut collection = DistractorCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.append(Distractor::new("Paris")), 1);
        assert_eq!(collection.append(Distractor::new("London")), 2);
        assert_eq!(collection.count(), 2);
    }

    #[test]
    fn resolves_letter_by_position() {
        let collection = capitals();
        assert_eq!(collection.resolve_correct_answer_value("A"), Ok("Paris"));
        assert_eq!(collection.resolve_correct_answer_value("C"), Ok("Berlin"));
    }

    #[test]
    fn rejects_letter_beyond_collection() {
        let err = capitals().resolve_correct_answer_value("Z").unwrap_err();
        assert_eq!(
            err,
            DistractorCollectionError::LabelOutOfRange {
                label: "Z".to_string(),
                index: 25,
                count: 3,
            }
        );
    }

    #[test]
    fn rejects_padded_or_lowercase_letter() {
        let collection = capitals();
        assert!(matches!(
            collection.resolve_correct_answer_value(" A"),
            Err(DistractorCollectionError::UnknownLabel(_))
        ));
        assert!(matches!(
            collection.resolve_correct_answer_value("a"),
            Err(DistractorCollectionError::UnknownLabel(_))
        ));
    }

    #[test]
    fn to_texts_keeps_append_order() {
        assert_eq!(capitals().to_texts(), vec!["Paris", "London", "Berlin"]);
    }

    #[test]
    fn labeled_runs_out_after_alphabet() {
        let collection: DistractorCollection = (0..27)
            .map(|index| Distractor::new(format!("option {index}")))
            .collect();
        let labels: Vec<Option<char>> = collection.labeled().map(|(label, _)| label).collect();
        assert_eq!(labels[0], Some('A'));
        assert_eq!(labels[25], Some('Z'));
        assert_eq!(labels[26], None);
    }
}
