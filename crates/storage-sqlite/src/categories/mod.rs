//! SQLite storage implementation for categories and per-user hidden flags.

mod model;
mod repository;

pub use model::{CategoryDB, HiddenCategoryDB};
pub use repository::CategoryRepository;
