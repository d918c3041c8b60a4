//! Database models for categories.

use diesel::prelude::*;
use log::warn;
use serde::{Deserialize, Serialize};

use guap_core::categories::{Category, Supercategory};

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
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CategoryDB {
    pub id: String,
    pub name: String,
    pub supercategory: String,
    pub user_id: Option<String>,
}

#[derive(Queryable, Selectable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::user_hidden_categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HiddenCategoryDB {
    pub user_id: String,
    pub category_id: String,
}

impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        let supercategory = db.supercategory.parse().unwrap_or_else(|_| {
            warn!(
                "Category {} has unknown supercategory '{}', treating as misc",
                db.id, db.supercategory
            );
            Supercategory::Misc
        });
        Self {
            id: db.id,
            name: db.name,
            supercategory,
            user_id: db.user_id,
        }
    }
}
