use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use guap_core::categories::{Category, CategoryRepositoryTrait, NewCategory};
use guap_core::constants::MISC_CATEGORY_NAME;
use guap_core::Result;

use super::model::{CategoryDB, HiddenCategoryDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{categories, user_hidden_categories};

pub struct CategoryRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        CategoryRepository { pool, writer }
    }

    fn owned_or_global(conn: &mut SqliteConnection, owner: &str) -> Result<Vec<CategoryDB>> {
        Ok(categories::table
            .filter(
                categories::user_id
                    .is_null()
                    .or(categories::user_id.eq(owner)),
            )
            .select(CategoryDB::as_select())
            .load::<CategoryDB>(conn)
            .map_err(StorageError::from)?)
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn list_visible(&self, owner: &str) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let hidden: HashSet<String> = user_hidden_categories::table
            .filter(user_hidden_categories::user_id.eq(owner))
            .select(user_hidden_categories::category_id)
            .load::<String>(&mut conn)
            .map_err(StorageError::from)?
            .into_iter()
            .collect();
        let rows = Self::owned_or_global(&mut conn, owner)?;
        Ok(rows
            .into_iter()
            .filter(|c| !hidden.contains(&c.id))
            .map(Category::from)
            .collect())
    }

    fn list_resolvable(&self, owner: &str) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = Self::owned_or_global(&mut conn, owner)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    fn get_misc_category_id(&self) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(categories::table
            .filter(categories::user_id.is_null())
            .filter(categories::name.eq(MISC_CATEGORY_NAME))
            .select(categories::id)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?)
    }

    fn get_by_id(&self, category_id: &str) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let row = categories::table
            .find(category_id)
            .select(CategoryDB::as_select())
            .first::<CategoryDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Category::from))
    }

    async fn insert_new_category(
        &self,
        owner: String,
        new_category: NewCategory,
    ) -> Result<Category> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let row = CategoryDB {
                    id: Uuid::now_v7().to_string(),
                    name: new_category.name,
                    supercategory: new_category.supercategory.as_str().to_string(),
                    user_id: Some(owner),
                };
                let inserted = diesel::insert_into(categories::table)
                    .values(&row)
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted.into())
            })
            .await
    }

    async fn hide_category(&self, owner: String, category_id: String) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::insert_or_ignore_into(user_hidden_categories::table)
                    .values(&HiddenCategoryDB {
                        user_id: owner,
                        category_id,
                    })
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn unhide_category(&self, owner: String, category_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    user_hidden_categories::table
                        .filter(user_hidden_categories::user_id.eq(owner))
                        .filter(user_hidden_categories::category_id.eq(category_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
