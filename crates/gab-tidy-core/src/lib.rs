//! Core types and mapping logic for the gab-tidy loader.
//!
//! This crate is deliberately free of database dependencies. It owns the
//! typed JSON entity model, the closed set of destination tables, and the
//! pure json-to-rows mapping; executing the resulting row batches against
//! SQLite is the job of `gab-tidy-store-sqlite`.

pub mod assemble;
pub mod error;
pub mod map;
pub mod model;
pub mod table;

#[cfg(test)]
pub(crate) mod testdata;

pub use assemble::assemble;
pub use error::{LineError, Result};
pub use model::{Gab, decode_line};
pub use table::{Row, RowBatches, SqlValue, Table};
