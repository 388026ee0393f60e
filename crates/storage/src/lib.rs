//! Watch persistence.
//!
//! This crate provides:
//! - `WatchStore` trait for pluggable watch persistence
//! - PostgreSQL implementation backed by `sqlx`
//! - In-memory implementation for tests and SMTP-less development setups

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use error::StorageError;
pub use memory::MemoryWatchStore;
pub use postgres::PgWatchStore;
pub use store::WatchStore;
