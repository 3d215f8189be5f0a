//! Test item aggregate and its exported record.
//!
//! # Responsibility
//! - Assemble one multiple-choice item from stem, distractors and answer key.
//! - Validate the assembled item and emit a stable record.
//!
//! # Invariants
//! - Building never fails; every check runs at export time.
//! - Export stops at the first failing check and never returns a partial
//!   record.
//! - Export does not mutate the item, so a caller can fix inputs and retry.
//!
//! # See also
//! - `model::labels` for the letter-to-position mapping.

use crate::model::distractor::Distractor;
use crate::model::distractor_collection::{DistractorCollection, DistractorCollectionError};
use crate::model::labels::{label_at, label_capacity, label_index};
use crate::model::rules::ValidationRules;
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Record field name of the question text.
pub const STEM: &str = "stem";
/// Record field name of the ordered distractor texts.
pub const DISTRACTORS: &str = "distractors";
/// Record field name of the correct distractor text.
pub const CORRECT_ANSWER: &str = "correctAnswer";
/// Record field name of the correct distractor position.
pub const CORRECT_ANSWER_ID: &str = "correctAnswerId";

const MIN_DISTRACTORS: usize = 2;

/// One multiple-choice item under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestItem {
    stem: String,
    // Created on first append or answer lookup.
    distractors: Option<DistractorCollection>,
    correct_answer: String,
    correct_answer_id: Option<usize>,
    rules: ValidationRules,
}

/// Validated, immutable export of a `TestItem`.
///
/// Serialized field names are part of the import contract and must stay
/// `stem`, `distractors`, `correctAnswer`, `correctAnswerId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestItemRecord {
    pub stem: String,
    pub distractors: Vec<String>,
    pub correct_answer: String,
    /// Zero-based position of the answer letter in `A..Z`.
    pub correct_answer_id: usize,
}

impl TestItem {
    /// Creates an empty item with default validation rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty item that applies `rules` at export.
    pub fn with_rules(rules: ValidationRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Overwrites the stem. No validation happens here.
    pub fn set_stem(&mut self, stem: impl Into<String>) -> &mut Self {
        self.stem = stem.into();
        self
    }

    /// Appends a distractor; call order defines label assignment.
    pub fn append_distractor(&mut self, distractor: impl Into<Distractor>) -> &mut Self {
        self.distractor_collection_mut().append(distractor.into());
        self
    }

    /// Resolves `answer_key` against the current distractors and stores the
    /// result.
    ///
    /// An unresolvable key leaves the correct answer empty; the failure is
    /// reported by `validate()`, not here. `correct_answer_id` records the
    /// key's position in `A..Z` regardless of how many distractors exist.
    pub fn set_correct_answer(&mut self, answer_key: &str) -> &mut Self {
        let resolved = self
            .distractor_collection_mut()
            .resolve_correct_answer_value(answer_key)
            .map(str::to_string);
        self.correct_answer = match resolved {
            Ok(text) => text,
            Err(err) => {
                let reason = match err {
                    DistractorCollectionError::UnknownLabel(_) => "unknown_label",
                    DistractorCollectionError::LabelOutOfRange { .. } => "out_of_range",
                };
                debug!(
                    "event=answer_resolve module=model status=unresolved reason={} distractor_count={}",
                    reason,
                    self.distractor_count()
                );
                String::new()
            }
        };
        self.correct_answer_id = label_index(answer_key);
        self
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn correct_answer_id(&self) -> Option<usize> {
        self.correct_answer_id
    }

    pub fn rules(&self) -> ValidationRules {
        self.rules
    }

    pub fn distractor_count(&self) -> usize {
        self.distractors
            .as_ref()
            .map_or(0, DistractorCollection::count)
    }

    /// Returns the distractor collection, if one has been created.
    pub fn distractors(&self) -> Option<&DistractorCollection> {
        self.distractors.as_ref()
    }

    /// Checks the item is complete enough to export.
    ///
    /// # Errors
    /// Checks run in this order and the first failure is returned:
    /// - `TooFewDistractors` when fewer than two distractors exist.
    /// - `MissingStem` when the stem is empty after trimming.
    /// - `UnresolvedCorrectAnswer` when no answer text was resolved.
    /// - `LabelAlphabetExhausted` when distractors outnumber `A..Z`.
    /// - `EmptyDistractor` when any distractor text is empty after trimming.
    /// - `TooManyDistractors` when the optional upper bound is enabled.
    pub fn validate(&self) -> Result<(), TestItemValidationError> {
        self.checked_answer_id().map(|_| ())
    }

    /// Upper-bound check on distractor count.
    ///
    /// A no-op unless `ValidationRules::max_distractors` is set.
    pub fn validate_not_too_many_distractors(&self) -> Result<(), TestItemValidationError> {
        let Some(max) = self.rules.max_distractors else {
            return Ok(());
        };
        let count = self.distractor_count();
        if count > max {
            return Err(TestItemValidationError::TooManyDistractors {
                stem: self.stem.clone(),
                count,
                max,
            });
        }
        Ok(())
    }

    /// Validates and exports the item.
    ///
    /// Validation errors are returned unchanged.
    pub fn to_record(&self) -> Result<TestItemRecord, TestItemValidationError> {
        let correct_answer_id = self.checked_answer_id()?;

        Ok(TestItemRecord {
            stem: self.stem.clone(),
            distractors: self
                .distractors
                .as_ref()
                .map(DistractorCollection::to_texts)
                .unwrap_or_default(),
            correct_answer: self.correct_answer.clone(),
            correct_answer_id,
        })
    }

    // Runs every export check; yields the answer position once all pass.
    fn checked_answer_id(&self) -> Result<usize, TestItemValidationError> {
        let count = self.distractor_count();
        if count < MIN_DISTRACTORS {
            return Err(TestItemValidationError::TooFewDistractors {
                stem: self.stem.clone(),
                count,
            });
        }

        if self.stem.trim().is_empty() {
            return Err(TestItemValidationError::MissingStem);
        }

        let correct_answer_id = match self.correct_answer_id {
            Some(id) if !self.correct_answer.is_empty() => id,
            _ => {
                return Err(TestItemValidationError::UnresolvedCorrectAnswer {
                    stem: self.stem.clone(),
                })
            }
        };

        if count > label_capacity() {
            return Err(TestItemValidationError::LabelAlphabetExhausted {
                stem: self.stem.clone(),
                count,
            });
        }

        let empty_position = self
            .distractors
            .iter()
            .flat_map(DistractorCollection::iter)
            .position(|distractor| distractor.text().trim().is_empty());
        if let Some(position) = empty_position {
            return Err(TestItemValidationError::EmptyDistractor {
                stem: self.stem.clone(),
                position,
            });
        }

        self.validate_not_too_many_distractors()?;
        Ok(correct_answer_id)
    }

    fn distractor_collection_mut(&mut self) -> &mut DistractorCollection {
        self.distractors
            .get_or_insert_with(DistractorCollection::new)
    }
}

/// Item-level validation failures.
///
/// `Display` renders messages meant for the author of the source file, in
/// the wording importers already show (two spaces after the lead sentence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestItemValidationError {
    /// Fewer than two distractors; usually stray whitespace upstream.
    TooFewDistractors { stem: String, count: usize },
    /// Stem is empty after trimming.
    MissingStem,
    /// Answer letter never set or not mapped to any distractor.
    UnresolvedCorrectAnswer { stem: String },
    /// More distractors than labels in `A..Z`.
    LabelAlphabetExhausted { stem: String, count: usize },
    /// Distractor at zero-based `position` has no text.
    EmptyDistractor { stem: String, position: usize },
    /// Enabled upper bound exceeded.
    TooManyDistractors {
        stem: String,
        count: usize,
        max: usize,
    },
}

impl Display for TestItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewDistractors { stem, .. } => write!(
                f,
                "An issue was encountered with the following text: {stem}.  \
                 Please check this file for leading and trailing spaces. No items were imported."
            ),
            Self::MissingStem => write!(
                f,
                "Your Items were not imported.  A question is missing a stem. \
                 Please review the format of your Aiken file and upload again."
            ),
            Self::UnresolvedCorrectAnswer { stem } => write!(
                f,
                "Your Items were not imported.  This question does not have a correct answer.  \
                 Check to make sure the distractors do not have any extra space before or after \
                 the beginning letter. Look at the item with STEM: {stem}"
            ),
            Self::LabelAlphabetExhausted { stem, count } => write!(
                f,
                "An issue was encountered with the following text: {stem}.  \
                 This stem has {count} distractors but only {} letters (A-Z) are available. \
                 No items were imported.",
                label_capacity()
            ),
            Self::EmptyDistractor { stem, position } => {
                let label = label_at(*position)
                    .map_or_else(|| (position + 1).to_string(), |label| label.to_string());
                write!(
                    f,
                    "An issue was encountered with the following text: {stem}.  \
                     Distractor {label} is empty. Please check this file for leading and \
                     trailing spaces. No items were imported."
                )
            }
            Self::TooManyDistractors { stem, count, max } => write!(
                f,
                "An issue was encountered with the following text: {stem}.  \
                 This stem has too many distractors ({count}, limit {max}). \
                 Check that an ANSWER is not missing from previous test item."
            ),
        }
    }
}

impl Error for TestItemValidationError {}

#[cfg(test)]
mod tests {
    use super::{TestItem, TestItemValidationError};

    #[test]
    fn collection_is_created_lazily() {
        let mut item = TestItem::new();
        assert!(item.distractors().is_none());
        item.append_distractor("Paris");
        assert_eq!(item.distractors().map(|d| d.count()), Some(1));
    }

    #[test]
    fn answer_lookup_creates_collection() {
        let mut item = TestItem::new();
        item.set_correct_answer("A");
        assert!(item.distractors().is_some());
        assert_eq!(item.correct_answer(), "");
        assert_eq!(item.correct_answer_id(), Some(0));
    }

    #[test]
    fn re_setting_answer_overwrites_previous_resolution() {
        let mut item = TestItem::new();
        item.append_distractor("Paris").append_distractor("London");
        item.set_correct_answer("B");
        assert_eq!(item.correct_answer(), "London");

        item.set_correct_answer("Q");
        assert_eq!(item.correct_answer(), "");
        assert_eq!(item.correct_answer_id(), Some(16));
    }

    #[test]
    fn whitespace_only_stem_is_missing() {
        let mut item = TestItem::new();
        item.set_stem("   ")
            .append_distractor("Paris")
            .append_distractor("London")
            .set_correct_answer("A");
        assert_eq!(item.validate(), Err(TestItemValidationError::MissingStem));
    }

    #[test]
    fn empty_distractor_text_cannot_be_the_answer() {
        let mut item = TestItem::new();
        item.set_stem("Pick one")
            .append_distractor("")
            .append_distractor("London")
            .set_correct_answer("A");
        assert!(matches!(
            item.validate(),
            Err(TestItemValidationError::UnresolvedCorrectAnswer { .. })
        ));
    }

    #[test]
    fn failed_export_leaves_item_untouched() {
        let mut item = TestItem::new();
        item.set_stem("Capital of France?").append_distractor("Paris");
        let before = item.clone();
        assert!(item.to_record().is_err());
        assert_eq!(item, before);
    }

    #[test]
    fn messages_keep_importer_wording() {
        assert_eq!(
            TestItemValidationError::MissingStem.to_string(),
            "Your Items were not imported.  A question is missing a stem. \
             Please review the format of your Aiken file and upload again."
        );
        let too_few = TestItemValidationError::TooFewDistractors {
            stem: "Capital of France?".to_string(),
            count: 1,
        };
        assert_eq!(
            too_few.to_string(),
            "An issue was encountered with the following text: Capital of France?.  \
             Please check this file for leading and trailing spaces. No items were imported."
        );
        let unresolved = TestItemValidationError::UnresolvedCorrectAnswer {
            stem: "Capital of France?".to_string(),
        };
        assert!(unresolved
            .to_string()
            .starts_with("Your Items were not imported.  This question does not have a correct answer.  Check"));
    }

    #[test]
    fn empty_distractor_message_names_letter() {
        let err = TestItemValidationError::EmptyDistractor {
            stem: "Capital of France?".to_string(),
            position: 1,
        };
        let message = err.to_string();
        assert!(message.contains("Capital of France?"));
        assert!(message.contains("Distractor B is empty"));
    }
}
