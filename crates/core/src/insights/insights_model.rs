use serde::{Deserialize, Serialize};

use crate::budgets::Budget;
use crate::categories::Category;
use crate::expenses::Expense;
use crate::summary::{
    group_by_category, group_by_supercategory, total_spent, CategoryTotal, SupercategoryTotals,
};

/// Aggregates of a single month, the input to insight generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSnapshot {
    pub income: f64,
    pub spent: f64,
    pub by_super: SupercategoryTotals,
    /// Largest category first.
    pub by_category: Vec<CategoryTotal>,
    pub month: Option<i32>,
    pub year: Option<i32>,
}

impl MonthSnapshot {
    pub fn from_budget(budget: &Budget, expenses: &[Expense], categories: &[Category]) -> Self {
        Self {
            income: budget.income,
            spent: total_spent(expenses),
            by_super: group_by_supercategory(expenses, categories),
            by_category: group_by_category(expenses, categories),
            month: Some(budget.month),
            year: Some(budget.year),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Info,
    Highlight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
}

impl Insight {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: InsightKind::Info,
        }
    }

    pub fn highlight(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: InsightKind::Highlight,
        }
    }
}
