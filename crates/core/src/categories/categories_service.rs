use log::debug;
use std::sync::Arc;

use super::categories_model::{find_category_by_name, sort_categories, Category, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{Error, Result};

pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn visible_category(&self, user_id: &str, category_id: &str) -> Result<Category> {
        self.repository
            .get_by_id(category_id)?
            .filter(|c| c.is_global() || c.user_id.as_deref() == Some(user_id))
            .ok_or_else(|| Error::not_found("Category not found."))
    }
}

#[async_trait::async_trait]
impl CategoryServiceTrait for CategoryService {
    fn get_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        let mut categories = self.repository.list_visible(user_id)?;
        sort_categories(&mut categories);
        Ok(categories)
    }

    fn get_resolvable_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        let mut categories = self.repository.list_resolvable(user_id)?;
        sort_categories(&mut categories);
        Ok(categories)
    }

    fn get_misc_category_id(&self) -> Result<Option<String>> {
        self.repository.get_misc_category_id()
    }

    async fn create_category(
        &self,
        user_id: &str,
        new_category: NewCategory,
    ) -> Result<Category> {
        let name = new_category.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::invalid("Category name is required."));
        }
        let existing = self.repository.list_visible(user_id)?;
        if find_category_by_name(&existing, &name).is_some() {
            return Err(Error::ConstraintViolation(
                "You already have a category with this name.".into(),
            ));
        }
        debug!("Creating category '{}' for user {}", name, user_id);
        self.repository
            .insert_new_category(
                user_id.to_string(),
                NewCategory {
                    name,
                    supercategory: new_category.supercategory,
                },
            )
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    Error::ConstraintViolation("You already have a category with this name.".into())
                } else {
                    e
                }
            })
    }

    async fn hide_category(&self, user_id: &str, category_id: &str) -> Result<()> {
        let category = self.visible_category(user_id, category_id)?;
        if category.is_global_misc() {
            return Err(Error::invalid("The Misc category cannot be hidden."));
        }
        self.repository
            .hide_category(user_id.to_string(), category.id)
            .await
    }

    async fn unhide_category(&self, user_id: &str, category_id: &str) -> Result<()> {
        self.repository
            .unhide_category(user_id.to_string(), category_id.to_string())
            .await?;
        Ok(())
    }
}
