//! Guap Core - Domain entities, services, and traits.
//!
//! This crate contains the budgeting logic for Guap: budgets, expenses,
//! categories, CSV imports and the dashboard view models. It is
//! database-agnostic and defines traits that are implemented by the
//! `storage-sqlite` crate.

pub mod budgets;
pub mod categories;
pub mod categorization;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod expenses;
pub mod imports;
pub mod insights;
pub mod payment_sources;
pub mod summary;
pub mod users;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
