//! Budget domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::time_utils::{format_month_year, is_valid_budget_year, is_valid_month};
use crate::{Error, Result};

/// One user's budget for a calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub month: i32,
    pub year: i32,
    pub income: f64,
    pub created_at: NaiveDateTime,
}

impl Budget {
    pub fn title(&self) -> String {
        format_month_year(self.month, self.year)
    }

    /// Sort key placing later months first.
    pub fn period_key(&self) -> (i32, i32) {
        (self.year, self.month)
    }
}

/// Input model for creating a new budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub month: i32,
    pub year: i32,
    pub income: f64,
}

impl NewBudget {
    pub fn validate(&self) -> Result<()> {
        if !is_valid_month(self.month)
            || !is_valid_budget_year(self.year)
            || !is_valid_income(self.income)
        {
            return Err(Error::invalid("Invalid month, year, or income."));
        }
        Ok(())
    }
}

pub fn is_valid_income(income: f64) -> bool {
    income.is_finite() && income >= 0.0
}

/// A budget together with its income minus everything spent against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetWithNetIncome {
    #[serde(flatten)]
    pub budget: Budget,
    pub net_income: f64,
}

impl BudgetWithNetIncome {
    pub fn spent(&self) -> f64 {
        self.budget.income - self.net_income
    }
}
