//! SQLite storage implementation for CSV imports.

mod model;
mod repository;

pub use model::ImportLogDB;
pub use repository::ImportRepository;
