use async_trait::async_trait;

use super::csv_parser::ParsedCsv;
use super::imports_model::{
    ColumnMapping, ImportBatch, ImportLog, ImportPreview, ImportResult, ImportRow,
};
use crate::errors::Result;

/// Trait for import persistence.
#[async_trait]
pub trait ImportRepositoryTrait: Send + Sync {
    /// Writes every batch and one log row per batch atomically.
    /// Returns the number of expenses inserted.
    async fn insert_import(
        &self,
        user_id: String,
        filename: Option<String>,
        batches: Vec<ImportBatch>,
    ) -> Result<usize>;
    /// Import logs, newest first.
    fn list_import_logs(&self, user_id: &str) -> Result<Vec<ImportLog>>;
}

/// Trait for the CSV import workflow.
#[async_trait]
pub trait ImportServiceTrait: Send + Sync {
    fn parse_csv(&self, content: &[u8]) -> Result<ParsedCsv>;
    fn preview_import(
        &self,
        user_id: &str,
        content: &[u8],
        mapping: &ColumnMapping,
    ) -> Result<ImportPreview>;
    async fn import_expenses(
        &self,
        user_id: &str,
        rows: Vec<ImportRow>,
        filename: Option<String>,
    ) -> Result<ImportResult>;
    fn get_import_history(&self, user_id: &str) -> Result<Vec<ImportLog>>;
}
