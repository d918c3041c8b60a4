//! Keyword categorizer.
//!
//! Rules are plain data: an ordered list of category names, each with the
//! keywords that select it. The first rule with a keyword contained in the
//! lower-cased description wins; anything else falls back to "Misc".

use std::sync::OnceLock;

use log::error;
use serde::{Deserialize, Serialize};

use crate::constants::MISC_CATEGORY_NAME;
use crate::Result;

const DEFAULT_RULES_JSON: &str = include_str!("default_rules.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizationRule {
    pub category_name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct KeywordCategorizer {
    rules: Vec<CategorizationRule>,
}

impl KeywordCategorizer {
    pub fn new(rules: Vec<CategorizationRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| CategorizationRule {
                category_name: rule.category_name,
                keywords: rule
                    .keywords
                    .into_iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect(),
            })
            .collect();
        Self { rules }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Vec<CategorizationRule> = serde_json::from_str(json)?;
        Ok(Self::new(rules))
    }

    /// The bundled rule table.
    pub fn default_rules() -> &'static KeywordCategorizer {
        static DEFAULT: OnceLock<KeywordCategorizer> = OnceLock::new();
        DEFAULT.get_or_init(|| {
            KeywordCategorizer::from_json(DEFAULT_RULES_JSON).unwrap_or_else(|e| {
                error!("Bundled categorization rules are invalid: {}", e);
                KeywordCategorizer::default()
            })
        })
    }

    pub fn rules(&self) -> &[CategorizationRule] {
        &self.rules
    }

    /// Category name for a free-text expense description.
    pub fn categorize(&self, description: &str) -> &str {
        let normalized = description.trim().to_lowercase();
        if normalized.is_empty() {
            return MISC_CATEGORY_NAME;
        }
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| normalized.contains(k.as_str())))
            .map(|rule| rule.category_name.as_str())
            .unwrap_or(MISC_CATEGORY_NAME)
    }
}

/// Categorizes with the bundled rules.
pub fn categorize_description(description: &str) -> &'static str {
    KeywordCategorizer::default_rules().categorize(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_parse() {
        let categorizer = KeywordCategorizer::from_json(DEFAULT_RULES_JSON).unwrap();
        assert!(!categorizer.rules().is_empty());
        assert!(categorizer
            .rules()
            .iter()
            .all(|r| r.keywords.iter().all(|k| *k == k.to_lowercase())));
    }

    #[test]
    fn test_matches_keywords_case_insensitively() {
        assert_eq!(categorize_description("TRADER JOE'S #123"), "Groceries");
        assert_eq!(categorize_description("  Starbucks Coffee "), "Restaurants");
        assert_eq!(categorize_description("Netflix.com"), "Subscriptions");
        assert_eq!(categorize_description("Monthly rent"), "Rent");
    }

    #[test]
    fn test_empty_or_unknown_falls_back_to_misc() {
        assert_eq!(categorize_description(""), "Misc");
        assert_eq!(categorize_description("   "), "Misc");
        assert_eq!(categorize_description("zzz unknown vendor"), "Misc");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let categorizer = KeywordCategorizer::new(vec![
            CategorizationRule {
                category_name: "Transportation".into(),
                keywords: vec!["Uber".into()],
            },
            CategorizationRule {
                category_name: "Restaurants".into(),
                keywords: vec!["uber eats".into()],
            },
        ]);
        assert_eq!(categorizer.categorize("UBER EATS order"), "Transportation");
    }

    #[test]
    fn test_blank_keywords_never_match() {
        let categorizer = KeywordCategorizer::new(vec![CategorizationRule {
            category_name: "Everything".into(),
            keywords: vec!["  ".into()],
        }]);
        assert_eq!(categorizer.categorize("anything"), "Misc");
    }
}
