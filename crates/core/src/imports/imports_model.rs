//! Import domain models.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::expenses::ExpenseRecord;

/// Which CSV columns hold which expense fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMapping {
    pub amount_column: usize,
    pub description_column: usize,
    pub month_column: usize,
    /// When absent every row uses `default_year`.
    #[serde(default)]
    pub year_column: Option<usize>,
    /// Falls back to the current calendar year.
    #[serde(default)]
    pub default_year: Option<i32>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            amount_column: 0,
            description_column: 1,
            month_column: 2,
            year_column: None,
            default_year: None,
        }
    }
}

/// First problem found on a CSV row, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIssue {
    MissingDescription,
    InvalidAmount,
    InvalidMonth,
    InvalidYear,
    NoBudget,
}

impl RowIssue {
    pub fn message(&self) -> &'static str {
        match self {
            RowIssue::MissingDescription => "Missing description",
            RowIssue::InvalidAmount => "Invalid amount",
            RowIssue::InvalidMonth => "Invalid month",
            RowIssue::InvalidYear => "Invalid year",
            RowIssue::NoBudget => "No budget for this month",
        }
    }
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One normalized CSV row as shown before importing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRow {
    /// Position among the data rows, starting at 0.
    pub row_index: usize,
    pub description: String,
    pub amount: Option<f64>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub budget_id: Option<String>,
    pub category_name: String,
    pub category_id: Option<String>,
    pub error: Option<String>,
}

impl PreviewRow {
    pub fn is_importable(&self) -> bool {
        self.error.is_none() && self.category_id.is_some()
    }

    /// The submit form of this row, if it can be imported.
    pub fn to_import_row(&self) -> Option<ImportRow> {
        if !self.is_importable() {
            return None;
        }
        Some(ImportRow {
            description: self.description.clone(),
            amount: self.amount?,
            month: self.month?,
            year: self.year?,
            category_id: self.category_id.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreview {
    pub rows: Vec<PreviewRow>,
    pub importable_count: usize,
    pub skipped_count: usize,
    pub skipped_no_budget: usize,
}

impl ImportPreview {
    pub fn import_rows(&self) -> Vec<ImportRow> {
        self.rows.iter().filter_map(PreviewRow::to_import_row).collect()
    }
}

/// A row submitted for import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRow {
    pub description: String,
    pub amount: f64,
    pub month: i32,
    pub year: i32,
    #[serde(default)]
    pub category_id: Option<String>,
}

/// Expenses destined for one budget within a single import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportBatch {
    pub budget_id: String,
    pub expenses: Vec<ExpenseRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub imported: usize,
    pub skipped_no_budget: usize,
    pub skipped_invalid: usize,
    pub message: String,
}

impl ImportResult {
    pub fn new(imported: usize, skipped_no_budget: usize, skipped_invalid: usize) -> Self {
        let mut message = format!("Imported {} expense(s).", imported);
        if skipped_no_budget > 0 {
            message.push_str(&format!(
                " {} row(s) skipped (no budget for that month).",
                skipped_no_budget
            ));
        }
        Self {
            imported,
            skipped_no_budget,
            skipped_invalid,
            message,
        }
    }
}

/// Audit record written once per budget touched by an import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportLog {
    pub id: String,
    pub user_id: String,
    pub budget_id: String,
    pub row_count: i32,
    pub filename: Option<String>,
    pub created_at: NaiveDateTime,
}
