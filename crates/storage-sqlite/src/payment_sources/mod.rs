//! SQLite storage implementation for payment sources.

mod model;
mod repository;

pub use model::PaymentSourceDB;
pub use repository::PaymentSourceRepository;
