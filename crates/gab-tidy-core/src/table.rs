//! The closed set of destination tables and the row types mapped into them.
//!
//! Keeping the tables as an enum (rather than stringly-keyed maps) means
//! the schema, the mappers, and the loader are all checked against the
//! same fixed set at compile time.

use strum::{EnumCount, EnumIter, IntoStaticStr};

/// Every data table in the store, declared in dependency order: entities
/// referenced by id come before the `gab` row that references them, which
/// comes before the link tables referencing both sides. The loader executes
/// batches in this order so inserts never dangle.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Table {
  Emoji,
  Account,
  AccountFields,
  AccountEmoji,
  GroupCategory,
  GabGroup,
  GroupTag,
  MediaAttachment,
  Card,
  Gab,
  GabMention,
  GabMediaAttachment,
  GabTag,
  GabEmoji,
}

impl Table {
  /// All tables in dependency (insertion) order.
  pub const ALL: [Table; Table::COUNT] = [
    Table::Emoji,
    Table::Account,
    Table::AccountFields,
    Table::AccountEmoji,
    Table::GroupCategory,
    Table::GabGroup,
    Table::GroupTag,
    Table::MediaAttachment,
    Table::Card,
    Table::Gab,
    Table::GabMention,
    Table::GabMediaAttachment,
    Table::GabTag,
    Table::GabEmoji,
  ];

  /// The SQL name of the table.
  pub fn name(self) -> &'static str {
    self.into()
  }
}

/// A parameter value ready for binding into an insert statement.
///
/// The only coercion performed anywhere in the mapping is boolean → 0/1;
/// ISO timestamps and everything else textual pass through verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
  Null,
  Integer(i64),
  Text(String),
}

impl From<String> for SqlValue {
  fn from(s: String) -> Self {
    SqlValue::Text(s)
  }
}

impl From<&str> for SqlValue {
  fn from(s: &str) -> Self {
    SqlValue::Text(s.to_owned())
  }
}

impl From<i64> for SqlValue {
  fn from(n: i64) -> Self {
    SqlValue::Integer(n)
  }
}

impl From<bool> for SqlValue {
  fn from(b: bool) -> Self {
    SqlValue::Integer(b as i64)
  }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
  fn from(opt: Option<T>) -> Self {
    opt.map_or(SqlValue::Null, Into::into)
  }
}

/// One row's parameters, in the column order of the table's insert SQL.
pub type Row = Vec<SqlValue>;

/// Accumulated rows for every table, built up by the mappers and merged by
/// the assembler. Explicitly passed and merged — never ambient state.
#[derive(Debug, Default)]
pub struct RowBatches {
  batches: [Vec<Row>; Table::COUNT],
}

impl RowBatches {
  pub fn new() -> Self {
    Self::default()
  }

  /// Queue one row for `table`.
  pub fn push(&mut self, table: Table, row: Row) {
    self.batches[table as usize].push(row);
  }

  /// Move every row of `other` in after this batch's rows, table by table.
  pub fn append(&mut self, mut other: RowBatches) {
    for table in Table::ALL {
      self.batches[table as usize]
        .append(&mut other.batches[table as usize]);
    }
  }

  /// The queued rows for one table, in insertion order.
  pub fn rows(&self, table: Table) -> &[Row] {
    &self.batches[table as usize]
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn table_names_match_schema() {
    assert_eq!(Table::GabGroup.name(), "gab_group");
    assert_eq!(Table::AccountFields.name(), "account_fields");
    assert_eq!(Table::GabMediaAttachment.name(), "gab_media_attachment");
  }

  #[test]
  fn all_covers_every_variant_in_declaration_order() {
    let iterated: Vec<Table> = Table::iter().collect();
    assert_eq!(iterated, Table::ALL);
  }

  #[test]
  fn append_keeps_self_rows_first() {
    let mut a = RowBatches::new();
    a.push(Table::Gab, vec!["first".into()]);
    let mut b = RowBatches::new();
    b.push(Table::Gab, vec!["second".into()]);
    a.append(b);

    let rows = a.rows(Table::Gab);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], SqlValue::Text("first".into()));
    assert_eq!(rows[1][0], SqlValue::Text("second".into()));
  }

  #[test]
  fn bool_coerces_to_integer() {
    assert_eq!(SqlValue::from(true), SqlValue::Integer(1));
    assert_eq!(SqlValue::from(false), SqlValue::Integer(0));
    assert_eq!(SqlValue::from(None::<String>), SqlValue::Null);
  }
}
