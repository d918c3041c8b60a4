use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use guap_core::imports::{ImportBatch, ImportLog, ImportRepositoryTrait};
use guap_core::Result;

use super::model::ImportLogDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::expenses::ExpenseDB;
use crate::schema::{expenses, import_log};
use crate::utils::chunk_for_sqlite;

pub struct ImportRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ImportRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ImportRepository { pool, writer }
    }
}

#[async_trait]
impl ImportRepositoryTrait for ImportRepository {
    async fn insert_import(
        &self,
        owner: String,
        filename: Option<String>,
        batches: Vec<ImportBatch>,
    ) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut inserted = 0;
                for batch in batches {
                    let row_count = batch.expenses.len();
                    let rows: Vec<ExpenseDB> =
                        batch.expenses.into_iter().map(ExpenseDB::from).collect();
                    for chunk in chunk_for_sqlite(&rows) {
                        diesel::insert_into(expenses::table)
                            .values(chunk)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                    }

                    let log_row = ImportLogDB {
                        id: Uuid::now_v7().to_string(),
                        user_id: owner.clone(),
                        budget_id: batch.budget_id,
                        row_count: row_count as i32,
                        filename: filename.clone(),
                        created_at: Utc::now().naive_utc(),
                    };
                    diesel::insert_into(import_log::table)
                        .values(&log_row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                    debug!(
                        "Imported {} expense(s) into budget {}",
                        row_count, log_row.budget_id
                    );
                    inserted += row_count;
                }
                Ok(inserted)
            })
            .await
    }

    fn list_import_logs(&self, owner: &str) -> Result<Vec<ImportLog>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = import_log::table
            .filter(import_log::user_id.eq(owner))
            .order((import_log::created_at.desc(), import_log::id.desc()))
            .select(ImportLogDB::as_select())
            .load::<ImportLogDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(ImportLog::from).collect())
    }
}
