//! Database models for the import log.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use guap_core::imports::ImportLog;

#[derive(
    Queryable, Identifiable, Selectable, Insertable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::import_log)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ImportLogDB {
    pub id: String,
    pub user_id: String,
    pub budget_id: String,
    pub row_count: i32,
    pub filename: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<ImportLogDB> for ImportLog {
    fn from(db: ImportLogDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            budget_id: db.budget_id,
            row_count: db.row_count,
            filename: db.filename,
            created_at: db.created_at,
        }
    }
}
