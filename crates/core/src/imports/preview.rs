use std::collections::HashMap;

use super::csv_parser::ParsedCsv;
use super::csv_values::{parse_amount, parse_month_code, parse_year};
use super::imports_model::{ColumnMapping, ImportPreview, PreviewRow, RowIssue};
use crate::budgets::Budget;
use crate::categorization::KeywordCategorizer;
use crate::categories::{find_category_by_name, Category};
use crate::constants::MISC_CATEGORY_NAME;
use crate::utils::time_utils::is_valid_budget_year;

/// Everything a preview needs besides the file itself.
pub struct PreviewContext<'a> {
    pub budgets: &'a [Budget],
    pub categories: &'a [Category],
    pub misc_category_id: Option<&'a str>,
    pub categorizer: &'a KeywordCategorizer,
    /// Year used when the mapping names neither a year column nor a default.
    pub fallback_year: i32,
}

/// Normalizes every data row and flags the first problem on each.
pub fn build_preview(
    parsed: &ParsedCsv,
    mapping: &ColumnMapping,
    ctx: &PreviewContext<'_>,
) -> ImportPreview {
    let budget_by_period: HashMap<(i32, i32), &str> = ctx
        .budgets
        .iter()
        .map(|b| ((b.month, b.year), b.id.as_str()))
        .collect();
    let default_year = mapping.default_year.unwrap_or(ctx.fallback_year);

    let rows: Vec<PreviewRow> = parsed
        .rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let description = ParsedCsv::cell(row, mapping.description_column)
                .trim()
                .to_string();
            let amount = parse_amount(ParsedCsv::cell(row, mapping.amount_column));
            let month = parse_month_code(ParsedCsv::cell(row, mapping.month_column));
            let year = match mapping.year_column {
                Some(col) => parse_year(ParsedCsv::cell(row, col)),
                None => Some(default_year).filter(|y| is_valid_budget_year(*y)),
            };
            let budget_id = match (month, year) {
                (Some(m), Some(y)) => budget_by_period.get(&(m, y)).map(|id| id.to_string()),
                _ => None,
            };

            let issue = if description.is_empty() {
                Some(RowIssue::MissingDescription)
            } else if amount.is_none() {
                Some(RowIssue::InvalidAmount)
            } else if month.is_none() {
                Some(RowIssue::InvalidMonth)
            } else if year.is_none() {
                Some(RowIssue::InvalidYear)
            } else if budget_id.is_none() {
                Some(RowIssue::NoBudget)
            } else {
                None
            };

            let category_name = if issue.is_none() {
                ctx.categorizer.categorize(&description).to_string()
            } else {
                MISC_CATEGORY_NAME.to_string()
            };
            let category_id = find_category_by_name(ctx.categories, &category_name)
                .map(|c| c.id.clone())
                .or_else(|| ctx.misc_category_id.map(str::to_string));

            PreviewRow {
                row_index,
                description,
                amount,
                month,
                year,
                budget_id,
                category_name,
                category_id,
                error: issue.map(|i| i.message().to_string()),
            }
        })
        .collect();

    let importable_count = rows.iter().filter(|r| r.is_importable()).count();
    let skipped_no_budget = rows
        .iter()
        .filter(|r| r.error.as_deref() == Some(RowIssue::NoBudget.message()))
        .count();
    ImportPreview {
        skipped_count: rows.len() - importable_count,
        importable_count,
        skipped_no_budget,
        rows,
    }
}
