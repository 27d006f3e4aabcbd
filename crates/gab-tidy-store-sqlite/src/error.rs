//! Error types for the SQLite backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The store was initialised by an incompatible loader version. Nothing
  /// is written once this is detected; the store needs to be rebuilt from
  /// scratch with the current loader.
  #[error(
    "store schema version {store:?} does not match this loader's schema \
     version {loader:?}; re-create the database with this version"
  )]
  SchemaMismatch { store: String, loader: String },

  /// Any failure of the underlying connection: SQLite errors, a failed
  /// read of the input stream mid-file, or the connection thread going
  /// away. Fatal for the file in progress; its transaction rolls back.
  #[error(transparent)]
  Connection(#[from] tokio_rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
