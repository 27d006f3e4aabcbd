//! Error types for `gab-tidy-core`.

use thiserror::Error;

/// Why a single input line could not be turned into row batches.
///
/// Both variants share the same recovery path in the loader (skip the line
/// and count it), but they are kept distinct so diagnostics can separate
/// "not JSON at all" from "JSON that is not a gab".
#[derive(Debug, Error)]
pub enum LineError {
  /// The line is not a well-formed JSON document.
  #[error("malformed JSON: {0}")]
  Json(#[source] serde_json::Error),

  /// The line is valid JSON but is missing (or mistypes) a field the
  /// mapping requires.
  #[error("gab record missing or mistyping a required field: {0}")]
  Map(#[source] serde_json::Error),
}

pub type Result<T, E = LineError> = std::result::Result<T, E>;
