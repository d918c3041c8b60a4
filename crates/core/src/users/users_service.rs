use log::info;
use std::sync::Arc;

use super::users_model::{normalize_email, NewUser, User, UserCredentials};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result};

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, email: &str, password_hash: String) -> Result<User> {
        let email = normalize_email(email)?;
        let user = self
            .repository
            .insert_new_user(NewUser {
                email,
                password_hash,
            })
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    Error::ConstraintViolation("An account with this email already exists.".into())
                } else {
                    e
                }
            })?;
        info!("Registered user {}", user.id);
        Ok(user)
    }

    fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>> {
        let Ok(email) = normalize_email(email) else {
            return Ok(None);
        };
        self.repository.find_credentials_by_email(&email)
    }

    fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        self.repository.get_by_id(user_id)
    }
}
