use crate::categories::categories_model::{Category, NewCategory};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Global categories plus the user's own, excluding ones the user hid.
    fn list_visible(&self, user_id: &str) -> Result<Vec<Category>>;
    /// Global categories plus the user's own, hidden ones included.
    fn list_resolvable(&self, user_id: &str) -> Result<Vec<Category>>;
    /// Id of the global category named "Misc", if seeded.
    fn get_misc_category_id(&self) -> Result<Option<String>>;
    fn get_by_id(&self, category_id: &str) -> Result<Option<Category>>;
    async fn insert_new_category(
        &self,
        user_id: String,
        new_category: NewCategory,
    ) -> Result<Category>;
    async fn hide_category(&self, user_id: String, category_id: String) -> Result<()>;
    async fn unhide_category(&self, user_id: String, category_id: String) -> Result<usize>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn get_categories(&self, user_id: &str) -> Result<Vec<Category>>;
    /// Every category an expense of this user may point at, for totals.
    fn get_resolvable_categories(&self, user_id: &str) -> Result<Vec<Category>>;
    fn get_misc_category_id(&self) -> Result<Option<String>>;
    async fn create_category(
        &self,
        user_id: &str,
        new_category: NewCategory,
    ) -> Result<Category>;
    async fn hide_category(&self, user_id: &str, category_id: &str) -> Result<()>;
    async fn unhide_category(&self, user_id: &str, category_id: &str) -> Result<()>;
}
