use std::sync::Arc;

use super::payment_sources_model::{NewPaymentSource, PaymentSource};
use super::payment_sources_traits::{PaymentSourceRepositoryTrait, PaymentSourceServiceTrait};
use crate::errors::{Error, Result};

pub struct PaymentSourceService {
    repository: Arc<dyn PaymentSourceRepositoryTrait>,
}

impl PaymentSourceService {
    pub fn new(repository: Arc<dyn PaymentSourceRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl PaymentSourceServiceTrait for PaymentSourceService {
    fn get_payment_sources(&self, user_id: &str) -> Result<Vec<PaymentSource>> {
        self.repository.list_by_user(user_id)
    }

    async fn create_payment_source(
        &self,
        user_id: &str,
        new_source: NewPaymentSource,
    ) -> Result<PaymentSource> {
        let new_source = new_source.normalized()?;
        self.repository
            .insert_new_payment_source(user_id.to_string(), new_source)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    Error::ConstraintViolation("You already have a source with this name.".into())
                } else {
                    e
                }
            })
    }

    async fn delete_payment_source(&self, user_id: &str, source_id: &str) -> Result<()> {
        let deleted = self
            .repository
            .delete_payment_source(user_id.to_string(), source_id.to_string())
            .await?;
        if deleted == 0 {
            return Err(Error::not_found("Payment source not found."));
        }
        Ok(())
    }
}
