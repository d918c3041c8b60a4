//! Category domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{MISC_CATEGORY_NAME, MISC_COLOR, NEEDS_COLOR, WANTS_COLOR};
use crate::{Error, Result};

/// Top-level grouping every category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Supercategory {
    Needs,
    Wants,
    Misc,
}

impl Supercategory {
    pub const ALL: [Supercategory; 3] = [
        Supercategory::Needs,
        Supercategory::Wants,
        Supercategory::Misc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Supercategory::Needs => "needs",
            Supercategory::Wants => "wants",
            Supercategory::Misc => "misc",
        }
    }

    /// Display label, e.g. "Needs".
    pub fn label(&self) -> &'static str {
        match self {
            Supercategory::Needs => "Needs",
            Supercategory::Wants => "Wants",
            Supercategory::Misc => "Misc",
        }
    }

    /// Position when listing: needs, then wants, then misc.
    pub fn rank(&self) -> u8 {
        match self {
            Supercategory::Needs => 0,
            Supercategory::Wants => 1,
            Supercategory::Misc => 2,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Supercategory::Needs => NEEDS_COLOR,
            Supercategory::Wants => WANTS_COLOR,
            Supercategory::Misc => MISC_COLOR,
        }
    }
}

impl fmt::Display for Supercategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Supercategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "needs" => Ok(Supercategory::Needs),
            "wants" => Ok(Supercategory::Wants),
            "misc" => Ok(Supercategory::Misc),
            other => Err(Error::invalid(format!("Unknown supercategory '{}'.", other))),
        }
    }
}

/// A spending category. Global categories have no owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub supercategory: Supercategory,
    pub user_id: Option<String>,
}

impl Category {
    pub fn is_global(&self) -> bool {
        self.user_id.is_none()
    }

    pub fn is_global_misc(&self) -> bool {
        self.is_global() && self.name == MISC_CATEGORY_NAME
    }
}

/// Input model for a user-defined category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub supercategory: Supercategory,
}

/// Orders categories by supercategory rank, then name.
pub fn sort_categories(categories: &mut [Category]) {
    categories.sort_by(|a, b| {
        a.supercategory
            .rank()
            .cmp(&b.supercategory.rank())
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Case-insensitive lookup by category name.
pub fn find_category_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    let wanted = name.trim().to_lowercase();
    categories.iter().find(|c| c.name.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, supercategory: Supercategory) -> Category {
        Category {
            id: name.to_lowercase(),
            name: name.to_string(),
            supercategory,
            user_id: None,
        }
    }

    #[test]
    fn test_supercategory_round_trips_through_str() {
        for s in Supercategory::ALL {
            assert_eq!(s.as_str().parse::<Supercategory>().unwrap(), s);
        }
        assert_eq!("WANTS".parse::<Supercategory>().unwrap(), Supercategory::Wants);
        assert!("luxury".parse::<Supercategory>().is_err());
    }

    #[test]
    fn test_supercategory_serializes_lowercase() {
        let json = serde_json::to_string(&Supercategory::Needs).unwrap();
        assert_eq!(json, "\"needs\"");
    }

    #[test]
    fn test_sort_categories() {
        let mut categories = vec![
            category("Misc", Supercategory::Misc),
            category("Travel", Supercategory::Wants),
            category("Rent", Supercategory::Needs),
            category("Groceries", Supercategory::Needs),
        ];
        sort_categories(&mut categories);
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Groceries", "Rent", "Travel", "Misc"]);
    }

    #[test]
    fn test_find_category_by_name_ignores_case() {
        let categories = vec![category("Groceries", Supercategory::Needs)];
        assert!(find_category_by_name(&categories, "groceries").is_some());
        assert!(find_category_by_name(&categories, " GROCERIES ").is_some());
        assert!(find_category_by_name(&categories, "Rent").is_none());
    }
}
