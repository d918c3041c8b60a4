//! Expense domain models.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A spending record belonging to a budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub budget_id: String,
    pub description: String,
    pub amount: f64,
    pub category_id: Option<String>,
    pub payment_label: Option<String>,
}

/// Input model for logging an expense against a budget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub payment_label: Option<String>,
}

impl NewExpense {
    /// Trims text fields and checks amount and description.
    pub fn normalized(self) -> Result<Self> {
        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(Error::invalid("Description is required."));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(Error::invalid("Amount must be 0 or more."));
        }
        Ok(Self {
            description,
            amount: self.amount,
            category_id: non_blank(self.category_id),
            payment_label: non_blank(self.payment_label),
        })
    }
}

/// A fully resolved expense row ready to be written, used by bulk inserts.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    pub budget_id: String,
    pub description: String,
    pub amount: f64,
    pub category_id: Option<String>,
    pub payment_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategoryUpdate {
    pub category_id: Option<String>,
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
