use crate::errors::Result;
use crate::users::users_model::{NewUser, User, UserCredentials};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str) -> Result<Option<User>>;
    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>>;
    async fn insert_new_user(&self, new_user: NewUser) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, email: &str, password_hash: String) -> Result<User>;
    fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>>;
    fn get_user(&self, user_id: &str) -> Result<Option<User>>;
}
