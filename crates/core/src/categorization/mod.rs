//! Description-based expense categorization.

mod categorizer;

pub use categorizer::{categorize_description, CategorizationRule, KeywordCategorizer};
