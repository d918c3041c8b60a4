use async_trait::async_trait;
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::collections::HashMap;
use std::sync::Arc;

use guap_core::expenses::{Expense, ExpenseRecord, ExpenseRepositoryTrait, NewExpense};
use guap_core::{Error, Result};

use super::model::ExpenseDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expenses;
use crate::utils::chunk_for_sqlite;

pub struct ExpenseRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn list_by_budget(&self, budget_id: &str) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .filter(expenses::budget_id.eq(budget_id))
            .order(expenses::id.asc())
            .select(ExpenseDB::as_select())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn list_by_budgets(&self, budget_ids: &[String]) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let mut result = Vec::new();
        for chunk in chunk_for_sqlite(budget_ids) {
            let rows = expenses::table
                .filter(expenses::budget_id.eq_any(chunk))
                .order(expenses::id.asc())
                .select(ExpenseDB::as_select())
                .load::<ExpenseDB>(&mut conn)
                .map_err(StorageError::from)?;
            result.extend(rows.into_iter().map(Expense::from));
        }
        Ok(result)
    }

    fn get_by_id(&self, expense_id: &str) -> Result<Option<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let row = expenses::table
            .find(expense_id)
            .select(ExpenseDB::as_select())
            .first::<ExpenseDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Expense::from))
    }

    fn sum_by_budgets(&self, budget_ids: &[String]) -> Result<HashMap<String, f64>> {
        let mut conn = get_connection(&self.pool)?;
        let mut sums = HashMap::new();
        for chunk in chunk_for_sqlite(budget_ids) {
            let rows: Vec<(String, Option<f64>)> = expenses::table
                .filter(expenses::budget_id.eq_any(chunk))
                .group_by(expenses::budget_id)
                .select((expenses::budget_id, sum(expenses::amount)))
                .load(&mut conn)
                .map_err(StorageError::from)?;
            sums.extend(
                rows.into_iter()
                    .map(|(budget_id, total)| (budget_id, total.unwrap_or(0.0))),
            );
        }
        Ok(sums)
    }

    async fn insert_new_expense(
        &self,
        budget_id: String,
        new_expense: NewExpense,
    ) -> Result<Expense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let row: ExpenseDB = ExpenseRecord {
                    budget_id,
                    description: new_expense.description,
                    amount: new_expense.amount,
                    category_id: new_expense.category_id,
                    payment_label: new_expense.payment_label,
                }
                .into();
                let inserted = diesel::insert_into(expenses::table)
                    .values(&row)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted.into())
            })
            .await
    }

    async fn update_category(
        &self,
        expense_id: String,
        new_category_id: Option<String>,
    ) -> Result<Expense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let updated = diesel::update(expenses::table.find(&expense_id))
                    .set(expenses::category_id.eq(new_category_id))
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                updated
                    .map(Expense::from)
                    .ok_or_else(|| Error::not_found("Expense not found."))
            })
            .await
    }

    async fn delete_expense(&self, expense_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(expenses::table.find(expense_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
