//! Database models for payment sources.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use guap_core::payment_sources::PaymentSource;

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
#[diesel(table_name = crate::schema::payment_sources)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PaymentSourceDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub color: String,
    pub created_at: NaiveDateTime,
}

impl From<PaymentSourceDB> for PaymentSource {
    fn from(db: PaymentSourceDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            color: db.color,
            created_at: db.created_at,
        }
    }
}
