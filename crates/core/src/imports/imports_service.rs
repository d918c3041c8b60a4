use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::csv_parser::{parse_csv, ParsedCsv};
use super::imports_model::{
    ColumnMapping, ImportBatch, ImportLog, ImportPreview, ImportResult, ImportRow,
};
use super::imports_traits::{ImportRepositoryTrait, ImportServiceTrait};
use super::preview::{build_preview, PreviewContext};
use crate::budgets::{is_valid_income, BudgetRepositoryTrait};
use crate::categorization::KeywordCategorizer;
use crate::categories::CategoryRepositoryTrait;
use crate::errors::{Error, Result};
use crate::expenses::ExpenseRecord;
use crate::utils::time_utils::{current_month_year, is_valid_budget_year, is_valid_month};

/// Service behind the CSV upload flow: tokenize, preview, import.
pub struct ImportService {
    repository: Arc<dyn ImportRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    categorizer: KeywordCategorizer,
}

impl ImportService {
    pub fn new(
        repository: Arc<dyn ImportRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        Self::with_categorizer(
            repository,
            budget_repository,
            category_repository,
            KeywordCategorizer::default_rules().clone(),
        )
    }

    pub fn with_categorizer(
        repository: Arc<dyn ImportRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        categorizer: KeywordCategorizer,
    ) -> Self {
        Self {
            repository,
            budget_repository,
            category_repository,
            categorizer,
        }
    }
}

#[async_trait::async_trait]
impl ImportServiceTrait for ImportService {
    fn parse_csv(&self, content: &[u8]) -> Result<ParsedCsv> {
        parse_csv(content)
    }

    fn preview_import(
        &self,
        user_id: &str,
        content: &[u8],
        mapping: &ColumnMapping,
    ) -> Result<ImportPreview> {
        let parsed = parse_csv(content)?;
        let budgets = self.budget_repository.list_by_user(user_id)?;
        let categories = self.category_repository.list_visible(user_id)?;
        let misc_category_id = self.category_repository.get_misc_category_id()?;
        let (_, current_year) = current_month_year();

        let preview = build_preview(
            &parsed,
            mapping,
            &PreviewContext {
                budgets: &budgets,
                categories: &categories,
                misc_category_id: misc_category_id.as_deref(),
                categorizer: &self.categorizer,
                fallback_year: current_year,
            },
        );
        debug!(
            "Import preview for user {}: {} importable, {} skipped",
            user_id, preview.importable_count, preview.skipped_count
        );
        Ok(preview)
    }

    async fn import_expenses(
        &self,
        user_id: &str,
        rows: Vec<ImportRow>,
        filename: Option<String>,
    ) -> Result<ImportResult> {
        let budgets = self.budget_repository.list_by_user(user_id)?;
        let budget_by_period: HashMap<(i32, i32), String> = budgets
            .into_iter()
            .map(|b| ((b.month, b.year), b.id))
            .collect();
        let visible_categories: HashSet<String> = self
            .category_repository
            .list_visible(user_id)?
            .into_iter()
            .map(|c| c.id)
            .collect();
        let misc_category_id = self.category_repository.get_misc_category_id()?;

        let mut skipped_no_budget = 0;
        let mut skipped_invalid = 0;
        let mut batches: Vec<ImportBatch> = Vec::new();
        let mut batch_index: HashMap<String, usize> = HashMap::new();

        for row in rows {
            let description = row.description.trim().to_string();
            if description.is_empty()
                || !is_valid_income(row.amount)
                || !is_valid_month(row.month)
                || !is_valid_budget_year(row.year)
            {
                skipped_invalid += 1;
                continue;
            }
            let Some(budget_id) = budget_by_period.get(&(row.month, row.year)) else {
                skipped_no_budget += 1;
                continue;
            };
            let category_id = row
                .category_id
                .filter(|id| visible_categories.contains(id))
                .or_else(|| misc_category_id.clone());
            let Some(category_id) = category_id else {
                skipped_invalid += 1;
                continue;
            };

            let idx = *batch_index.entry(budget_id.clone()).or_insert_with(|| {
                batches.push(ImportBatch {
                    budget_id: budget_id.clone(),
                    expenses: Vec::new(),
                });
                batches.len() - 1
            });
            batches[idx].expenses.push(ExpenseRecord {
                budget_id: budget_id.clone(),
                description,
                amount: row.amount,
                category_id: Some(category_id),
                payment_label: None,
            });
        }

        if batches.is_empty() {
            if skipped_no_budget == 0 {
                return Err(Error::invalid("No valid rows to import."));
            }
            return Ok(ImportResult::new(0, skipped_no_budget, skipped_invalid));
        }

        let filename = filename
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());
        let imported = self
            .repository
            .insert_import(user_id.to_string(), filename, batches)
            .await?;
        info!(
            "Imported {} expense(s) for user {} ({} without budget, {} invalid)",
            imported, user_id, skipped_no_budget, skipped_invalid
        );
        Ok(ImportResult::new(
            imported,
            skipped_no_budget,
            skipped_invalid,
        ))
    }

    fn get_import_history(&self, user_id: &str) -> Result<Vec<ImportLog>> {
        self.repository.list_import_logs(user_id)
    }
}
