//! Payment sources - cards and accounts an expense can be labelled with.

mod payment_sources_model;
mod payment_sources_service;
mod payment_sources_traits;

pub use payment_sources_model::{NewPaymentSource, PaymentSource};
pub use payment_sources_service::PaymentSourceService;
pub use payment_sources_traits::{PaymentSourceRepositoryTrait, PaymentSourceServiceTrait};
