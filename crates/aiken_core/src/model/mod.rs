//! Test item domain model.
//!
//! # Responsibility
//! - Define the stem/distractor/answer aggregate consumed by importers.
//! - Keep letter-to-position mapping in one place.
//!
//! # Invariants
//! - Distractor labels are derived from position, never stored.
//! - Items validate only when exported.

pub mod distractor;
pub mod distractor_collection;
pub mod labels;
pub mod rules;
pub mod test_item;
