//! Database models for expenses.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use guap_core::expenses::{Expense, ExpenseRecord};

#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    Insertable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDB {
    pub id: String,
    pub budget_id: String,
    pub description: String,
    pub amount: f64,
    pub category_id: Option<String>,
    pub payment_label: Option<String>,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            id: db.id,
            budget_id: db.budget_id,
            description: db.description,
            amount: db.amount,
            category_id: db.category_id,
            payment_label: db.payment_label,
        }
    }
}

/// New rows get a time-ordered id so listing by id follows insertion order.
impl From<ExpenseRecord> for ExpenseDB {
    fn from(record: ExpenseRecord) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            budget_id: record.budget_id,
            description: record.description,
            amount: record.amount,
            category_id: record.category_id,
            payment_label: record.payment_label,
        }
    }
}
