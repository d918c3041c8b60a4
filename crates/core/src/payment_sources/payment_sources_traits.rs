use crate::errors::Result;
use crate::payment_sources::payment_sources_model::{NewPaymentSource, PaymentSource};
use async_trait::async_trait;

#[async_trait]
pub trait PaymentSourceRepositoryTrait: Send + Sync {
    /// The user's sources ordered by name.
    fn list_by_user(&self, user_id: &str) -> Result<Vec<PaymentSource>>;
    async fn insert_new_payment_source(
        &self,
        user_id: String,
        new_source: NewPaymentSource,
    ) -> Result<PaymentSource>;
    async fn delete_payment_source(&self, user_id: String, source_id: String) -> Result<usize>;
}

#[async_trait]
pub trait PaymentSourceServiceTrait: Send + Sync {
    fn get_payment_sources(&self, user_id: &str) -> Result<Vec<PaymentSource>>;
    async fn create_payment_source(
        &self,
        user_id: &str,
        new_source: NewPaymentSource,
    ) -> Result<PaymentSource>;
    async fn delete_payment_source(&self, user_id: &str, source_id: &str) -> Result<()>;
}
