//! Configurable validation rules applied at test-item export.

use serde::{Deserialize, Serialize};

/// Optional item rules beyond the mandatory checks.
///
/// The default leaves every optional rule disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Upper bound on distractors per item; `None` disables the check.
    pub max_distractors: Option<usize>,
}

impl ValidationRules {
    /// Enables the distractor upper bound.
    pub fn with_max_distractors(mut self, max: usize) -> Self {
        self.max_distractors = Some(max);
        self
    }
}
