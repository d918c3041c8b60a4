//! SQLite storage for Guap.
//!
//! Diesel lives only in this crate. It implements the repository traits
//! declared in `guap-core` and owns:
//! - connection pooling and the single-writer actor
//! - embedded migrations, including the seeded global categories
//! - Diesel model types and their conversions to domain types
//!
//! ```text
//!   guap-server ──► guap-core (services, traits)
//!        │                 ▲
//!        └──► guap-storage-sqlite (this crate) ──► SQLite
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod imports;
pub mod payment_sources;
pub mod users;

pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use errors::StorageError;

pub use guap_core::errors::{DatabaseError, Error, Result};
