//! SQLite backend for the gab-tidy loader.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. One `call` spans one input
//! file's entire transaction, so loading stays strictly sequential.

#![recursion_limit = "256"]

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use schema::SCHEMA_VERSION;
pub use store::{FileSummary, SqliteStore};
