//! Core use-case services.
//!
//! # Responsibility
//! - Apply item validation across a source file's batch of items.
//! - Keep batch policy (strict vs. lenient) out of the model.

pub mod item_export;
