//! Core domain logic for Aiken test item import.
//! This crate is the single source of truth for test item invariants.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
};
pub use model::distractor::Distractor;
pub use model::distractor_collection::{DistractorCollection, DistractorCollectionError};
pub use model::labels::{
    answer_key_from_line, canonical_labels, label_at, label_index,
    CORRECT_ANSWER_LINE_DETECTOR_SLUG,
};
pub use model::rules::ValidationRules;
pub use model::test_item::{TestItem, TestItemRecord, TestItemValidationError};
pub use service::item_export::{
    export_items, export_items_lenient, ItemExportError, ItemExportReport,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
