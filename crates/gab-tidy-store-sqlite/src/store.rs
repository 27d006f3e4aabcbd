//! [`SqliteStore`] — schema gating and batched, transactional loading.

use std::{io::BufRead, path::Path};

use chrono::Utc;
use gab_tidy_core::{LineError, Table, assemble, decode_line};
use rusqlite::OptionalExtension as _;
use tracing::{debug, info, warn};

use crate::{
  Error, Result,
  encode::{encode_dt, encode_row},
  schema::{SCHEMA, SCHEMA_VERSION, insert_sql},
};

/// Version string recorded in each file's provenance row.
const LOADER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-file outcome of [`SqliteStore::load_file`].
///
/// `gabs_added` is counted from the store after the file is processed, so
/// replace-on-conflict within the same file cannot inflate it. Embedded
/// (quoted) gabs count like any other row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSummary {
  pub gabs_added:     i64,
  pub parse_failures: i64,
}

/// What the gate found when the store was opened.
enum GateState {
  /// Empty database; the schema was created and versioned.
  Initialized,
  /// Existing database whose recorded version matches this loader.
  Matching,
  /// Existing database with a different (or missing) recorded version.
  Mismatched(Option<String>),
}

/// A gab archive store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone, Debug)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run the schema gate: an empty
  /// database is initialised from the schema, an existing one is checked
  /// for a matching schema version. On mismatch nothing is ever written.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.ensure_ready().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.ensure_ready().await?;
    Ok(store)
  }

  async fn ensure_ready(&self) -> Result<()> {
    let state = self
      .conn
      .call(|conn| {
        let table_count: i64 = conn.query_row(
          "select count(*) from sqlite_master where type = 'table'",
          [],
          |row| row.get(0),
        )?;

        if table_count == 0 {
          // journal_mode returns a row, so it cannot sit in the DDL batch
          conn.query_row("pragma journal_mode = wal", [], |_| Ok(()))?;
          conn.execute_batch(SCHEMA)?;
          conn.execute(
            "insert into _gab_tidy_data (key, value)
             values ('schema_version', ?1)",
            rusqlite::params![SCHEMA_VERSION],
          )?;
          return Ok(GateState::Initialized);
        }

        // Populated database: read back the recorded version. A database
        // that has tables but no version record predates this loader and
        // is treated as a mismatch.
        let has_meta: bool = conn
          .query_row(
            "select 1 from sqlite_master
             where type = 'table' and name = '_gab_tidy_data'",
            [],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        let recorded: Option<String> = if has_meta {
          conn
            .query_row(
              "select value from _gab_tidy_data where key = 'schema_version'",
              [],
              |row| row.get(0),
            )
            .optional()?
        } else {
          None
        };

        if recorded.as_deref() == Some(SCHEMA_VERSION) {
          Ok(GateState::Matching)
        } else {
          Ok(GateState::Mismatched(recorded))
        }
      })
      .await?;

    match state {
      GateState::Initialized => {
        info!(schema_version = SCHEMA_VERSION, "initialised empty store");
        Ok(())
      }
      GateState::Matching => {
        debug!(schema_version = SCHEMA_VERSION, "store schema version matches");
        Ok(())
      }
      GateState::Mismatched(recorded) => Err(Error::SchemaMismatch {
        store:  recorded.unwrap_or_else(|| "(none)".to_owned()),
        loader: SCHEMA_VERSION.to_owned(),
      }),
    }
  }

  /// Load one newline-delimited JSON stream into the store.
  ///
  /// The whole file runs in a single transaction: a provenance row is
  /// opened first (its rowid becomes the file id stamped into every row
  /// produced from this stream), each line is decoded and its batches
  /// executed in table dependency order, and the provenance row is
  /// finalised with the counts before the commit.
  ///
  /// A line that fails to decode — malformed JSON or a record missing a
  /// required field — is counted, logged and skipped; it never aborts the
  /// file. Only a store failure (or an unreadable stream) does, rolling
  /// back everything from this file.
  pub async fn load_file<R>(&self, filename: &str, reader: R) -> Result<FileSummary>
  where
    R: BufRead + Send + 'static,
  {
    let label = filename.to_owned();
    let summary = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        tx.execute(
          "insert into _inserted_files
             (filename, inserted_by_version, inserted_at)
           values (?1, ?2, ?3)",
          rusqlite::params![label, LOADER_VERSION, encode_dt(Utc::now())],
        )?;
        let file_id = tx.last_insert_rowid();

        let mut parse_failures: i64 = 0;
        for (line_no, line) in reader.lines().enumerate() {
          let line = line
            .map_err(|e| tokio_rusqlite::Error::Other(Box::new(e)))?;

          let gab = match decode_line(&line) {
            Ok(gab) => gab,
            Err(err) => {
              parse_failures += 1;
              match err {
                LineError::Json(_) => {
                  debug!(file = %label, line = line_no + 1, %err, "skipping unparseable line");
                }
                LineError::Map(_) => {
                  debug!(file = %label, line = line_no + 1, %err, "skipping unmappable record");
                }
              }
              continue;
            }
          };

          let batches = assemble(file_id, &gab);
          for table in Table::ALL {
            let rows = batches.rows(table);
            if rows.is_empty() {
              continue;
            }
            let mut stmt = tx.prepare_cached(insert_sql(table))?;
            for row in rows {
              stmt.execute(rusqlite::params_from_iter(encode_row(row)))?;
            }
          }
        }

        // The authoritative added count: rows actually present for this
        // file id, which replace-on-conflict cannot double-count.
        let gabs_added: i64 = tx.query_row(
          "select count(*) from gab where _file_id = ?1",
          rusqlite::params![file_id],
          |row| row.get(0),
        )?;

        tx.execute(
          "update _inserted_files
           set num_gabs_inserted = ?1, num_parsing_failures = ?2
           where id = ?3",
          rusqlite::params![gabs_added, parse_failures, file_id],
        )?;

        tx.commit()?;
        Ok(FileSummary { gabs_added, parse_failures })
      })
      .await?;

    if summary.parse_failures > 0 {
      warn!(
        file = filename,
        failures = summary.parse_failures,
        "some lines could not be parsed and were skipped"
      );
    }
    info!(
      file = filename,
      gabs_added = summary.gabs_added,
      parse_failures = summary.parse_failures,
      "finished loading file"
    );

    Ok(summary)
  }

  /// Total number of gab rows currently in the store.
  pub async fn gab_count(&self) -> Result<i64> {
    let count = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("select count(*) from gab", [], |row| row.get(0))?)
      })
      .await?;
    Ok(count)
  }

  /// The schema version the store has recorded, if any.
  pub async fn recorded_schema_version(&self) -> Result<Option<String>> {
    let version = self
      .conn
      .call(|conn| {
        Ok(
          conn
            .query_row(
              "select value from _gab_tidy_data where key = 'schema_version'",
              [],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;
    Ok(version)
  }
}
