use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use guap_core::payment_sources::{NewPaymentSource, PaymentSource, PaymentSourceRepositoryTrait};
use guap_core::Result;

use super::model::PaymentSourceDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::payment_sources;

pub struct PaymentSourceRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl PaymentSourceRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        PaymentSourceRepository { pool, writer }
    }
}

#[async_trait]
impl PaymentSourceRepositoryTrait for PaymentSourceRepository {
    fn list_by_user(&self, owner: &str) -> Result<Vec<PaymentSource>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = payment_sources::table
            .filter(payment_sources::user_id.eq(owner))
            .order(payment_sources::name.asc())
            .select(PaymentSourceDB::as_select())
            .load::<PaymentSourceDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(PaymentSource::from).collect())
    }

    async fn insert_new_payment_source(
        &self,
        owner: String,
        new_source: NewPaymentSource,
    ) -> Result<PaymentSource> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<PaymentSource> {
                let row = PaymentSourceDB {
                    id: Uuid::now_v7().to_string(),
                    user_id: owner,
                    name: new_source.name,
                    color: new_source.color,
                    created_at: Utc::now().naive_utc(),
                };
                let inserted = diesel::insert_into(payment_sources::table)
                    .values(&row)
                    .returning(PaymentSourceDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted.into())
            })
            .await
    }

    async fn delete_payment_source(&self, owner: String, source_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    payment_sources::table
                        .filter(payment_sources::id.eq(source_id))
                        .filter(payment_sources::user_id.eq(owner)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
