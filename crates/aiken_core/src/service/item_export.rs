//! Batch export of assembled test items.
//!
//! # Responsibility
//! - Turn a file's worth of `TestItem`s into records for import.
//! - Offer both all-or-nothing and skip-and-report policies.
//!
//! # Invariants
//! - `export_items` returns no records when any item fails.
//! - Failures carry the zero-based item position in the batch.
//! - Log events carry counts and positions only, never item text.

use crate::model::labels::canonical_labels;
use crate::model::test_item::{TestItem, TestItemRecord, TestItemValidationError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// First validation failure found in an all-or-nothing batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemExportError {
    /// Zero-based position of the failing item.
    pub position: usize,
    pub error: TestItemValidationError,
}

impl Display for ItemExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "item {}: {}", self.position + 1, self.error)
    }
}

impl Error for ItemExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

/// Outcome of a skip-and-report batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemExportReport {
    /// Records of valid items, in batch order.
    pub records: Vec<TestItemRecord>,
    /// Failures of invalid items, in batch order.
    pub failures: Vec<ItemExportError>,
}

impl ItemExportReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Exports every item or none.
///
/// # Errors
/// Returns the first item failure with its position; later items are not
/// validated.
pub fn export_items(items: &[TestItem]) -> Result<Vec<TestItemRecord>, ItemExportError> {
    let started_at = Instant::now();
    canonical_labels();
    info!(
        "event=item_export module=service status=start mode=strict item_count={}",
        items.len()
    );

    let mut records = Vec::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        match item.to_record() {
            Ok(record) => records.push(record),
            Err(error) => {
                error!(
                    "event=item_export module=service status=error mode=strict duration_ms={} position={} error_code={}",
                    started_at.elapsed().as_millis(),
                    position,
                    error_code(&error)
                );
                return Err(ItemExportError { position, error });
            }
        }
    }

    info!(
        "event=item_export module=service status=ok mode=strict duration_ms={} record_count={}",
        started_at.elapsed().as_millis(),
        records.len()
    );
    Ok(records)
}

/// Exports valid items and collects failures for the rest.
pub fn export_items_lenient(items: &[TestItem]) -> ItemExportReport {
    let started_at = Instant::now();
    canonical_labels();
    info!(
        "event=item_export module=service status=start mode=lenient item_count={}",
        items.len()
    );

    let mut report = ItemExportReport::default();
    for (position, item) in items.iter().enumerate() {
        match item.to_record() {
            Ok(record) => report.records.push(record),
            Err(error) => {
                warn!(
                    "event=item_skip module=service status=error position={} error_code={}",
                    position,
                    error_code(&error)
                );
                report.failures.push(ItemExportError { position, error });
            }
        }
    }

    info!(
        "event=item_export module=service status=ok mode=lenient duration_ms={} record_count={} failure_count={}",
        started_at.elapsed().as_millis(),
        report.records.len(),
        report.failures.len()
    );
    report
}

/// Stable log code for a validation failure.
pub fn error_code(err: &TestItemValidationError) -> &'static str {
    match err {
        TestItemValidationError::TooFewDistractors { .. } => "too_few_distractors",
        TestItemValidationError::MissingStem => "missing_stem",
        TestItemValidationError::UnresolvedCorrectAnswer { .. } => "unresolved_correct_answer",
        TestItemValidationError::LabelAlphabetExhausted { .. } => "label_alphabet_exhausted",
        TestItemValidationError::EmptyDistractor { .. } => "empty_distractor",
        TestItemValidationError::TooManyDistractors { .. } => "too_many_distractors",
    }
}

#[cfg(test)]
mod tests {
    use super::{error_code, ItemExportError};
    use crate::model::test_item::TestItemValidationError;
    use std::error::Error;

    #[test]
    fn error_display_uses_one_based_position() {
        let err = ItemExportError {
            position: 2,
            error: TestItemValidationError::MissingStem,
        };
        assert!(err.to_string().starts_with("item 3: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn error_codes_are_snake_case() {
        assert_eq!(
            error_code(&TestItemValidationError::MissingStem),
            "missing_stem"
        );
        assert_eq!(
            error_code(&TestItemValidationError::EmptyDistractor {
                stem: String::new(),
                position: 0,
            }),
            "empty_distractor"
        );
    }
}
