//! Per-entity mappers: typed JSON entities in, per-table row batches out.
//!
//! Each function is pure — no I/O, no shared state. The rows it returns are
//! positional and must line up with the column order of the matching insert
//! statement in the store crate's schema module; the two files should be
//! read and edited together.
//!
//! Ancestor identifiers (which gab owns this sub-entity, which source file
//! produced it) arrive through [`MapContext`] and are stamped into the
//! foreign-key and `_file_id` columns.

use crate::{
  model::{Account, Card, Emoji, Gab, Group, MediaAttachment, Mention, Tag},
  table::{Row, RowBatches, SqlValue, Table},
};

/// Ancestor identifiers needed to fill foreign-key columns.
#[derive(Debug, Clone, Copy)]
pub struct MapContext<'a> {
  /// Rowid of this file's provenance record.
  pub file_id: i64,
  /// Id of the gab that owns the entity being mapped.
  pub gab_id:  &'a str,
}

/// Map a list of emoji into `emoji` rows.
pub fn map_emoji_list(emojis: &[Emoji]) -> RowBatches {
  let mut out = RowBatches::new();
  for emoji in emojis {
    out.push(Table::Emoji, vec![
      emoji.shortcode.clone().into(),
      emoji.url.clone().into(),
      emoji.static_url.clone().into(),
    ]);
  }
  out
}

/// Map an account into `account`, `account_fields`, `emoji` and
/// `account_emoji` rows.
///
/// Profile fields keep their source order via a 1-based `ordering` column.
pub fn map_account(ctx: MapContext<'_>, account: &Account) -> RowBatches {
  let mut out = RowBatches::new();

  out.push(Table::Account, vec![
    account.id.clone().into(),
    account.username.clone().into(),
    account.acct.clone().into(),
    account.display_name.clone().into(),
    account.locked.into(),
    account.bot.into(),
    account.created_at.clone().into(),
    account.note.clone().into(),
    account.url.clone().into(),
    account.avatar.clone().into(),
    account.avatar_static.clone().into(),
    account.header.clone().into(),
    account.header_static.clone().into(),
    account.is_spam.into(),
    account.followers_count.into(),
    account.following_count.into(),
    account.statuses_count.into(),
    account.is_pro.into(),
    account.is_verified.into(),
    account.is_donor.into(),
    account.is_investor.into(),
    ctx.file_id.into(),
  ]);

  for (i, field) in account.fields.iter().enumerate() {
    out.push(Table::AccountFields, vec![
      account.id.clone().into(),
      ctx.file_id.into(),
      (i as i64 + 1).into(),
      field.name.clone().into(),
      field.value.clone().into(),
      field.verified_at.clone().into(),
    ]);
  }

  out.append(map_emoji_list(&account.emojis));
  for emoji in &account.emojis {
    out.push(Table::AccountEmoji, vec![
      account.id.clone().into(),
      ctx.file_id.into(),
      emoji.shortcode.clone().into(),
    ]);
  }

  out
}

/// Map a group into `group_category`, `gab_group` and `group_tag` rows.
///
/// A missing category yields zero `group_category` rows and a NULL
/// `group_category` column on the group itself.
pub fn map_group(ctx: MapContext<'_>, group: &Group) -> RowBatches {
  let mut out = RowBatches::new();

  let category_id = match &group.group_category {
    Some(category) => {
      out.push(Table::GroupCategory, vec![
        category.id.into(),
        category.created_at.clone().into(),
        category.updated_at.clone().into(),
        category.text.clone().into(),
      ]);
      SqlValue::Integer(category.id)
    }
    None => SqlValue::Null,
  };

  out.push(Table::GabGroup, vec![
    group.id.clone().into(),
    group.title.clone().into(),
    group.slug.clone().into(),
    group.url.clone().into(),
    group.description.clone().into(),
    group.description_html.clone().into(),
    group.cover_image_url.clone().into(),
    category_id,
    group.is_archived.into(),
    group.is_private.into(),
    group.is_visible.into(),
    group.member_count.into(),
    group.created_at.clone().into(),
    group.has_password.into(),
    ctx.file_id.into(),
  ]);

  for tag in group.tags.as_deref().unwrap_or_default() {
    out.push(Table::GroupTag, vec![
      group.id.clone().into(),
      ctx.file_id.into(),
      tag.clone().into(),
    ]);
  }

  out
}

/// Map one attachment into a `media_attachment` row plus the
/// `gab_media_attachment` link row.
pub fn map_media(ctx: MapContext<'_>, media: &MediaAttachment) -> RowBatches {
  let mut out = RowBatches::new();

  out.push(Table::MediaAttachment, vec![
    media.id.clone().into(),
    media.kind.clone().into(),
    media.file_content_type.clone().into(),
    media.url.clone().into(),
    media.preview_url.clone().into(),
    media.source_mp4.clone().into(),
    media.remote_url.clone().into(),
    media.text_url.clone().into(),
    media.description.clone().into(),
    media.blurhash.clone().into(),
  ]);
  out.push(Table::GabMediaAttachment, vec![
    ctx.gab_id.into(),
    media.id.clone().into(),
  ]);

  out
}

/// Map hashtags into `gab_tag` rows.
pub fn map_tags(ctx: MapContext<'_>, tags: &[Tag]) -> RowBatches {
  let mut out = RowBatches::new();
  for tag in tags {
    out.push(Table::GabTag, vec![
      ctx.gab_id.into(),
      tag.name.clone().into(),
      tag.url.clone().into(),
    ]);
  }
  out
}

/// Map mention references into `gab_mention` rows.
pub fn map_mentions(ctx: MapContext<'_>, mentions: &[Mention]) -> RowBatches {
  let mut out = RowBatches::new();
  for mention in mentions {
    out.push(Table::GabMention, vec![
      ctx.gab_id.into(),
      mention.id.clone().into(),
      mention.url.clone().into(),
      mention.acct.clone().into(),
    ]);
  }
  out
}

/// Map a link-preview card into a `card` row.
pub fn map_card(card: &Card) -> RowBatches {
  let mut out = RowBatches::new();
  out.push(Table::Card, vec![
    card.id.clone().into(),
    card.url.clone().into(),
    card.title.clone().into(),
    card.description.clone().into(),
    card.kind.clone().into(),
    card.provider_name.clone().into(),
    card.provider_url.clone().into(),
    card.html.clone().into(),
    card.image.clone().into(),
    card.embed_url.clone().into(),
    card.updated_at.clone().into(),
  ]);
  out
}

/// Build the gab's own row. Called last within one gab's contribution,
/// after every entity it references has produced its rows.
pub fn gab_row(file_id: i64, gab: &Gab, embedded: bool) -> Row {
  vec![
    gab.id.clone().into(),
    gab.created_at.clone().into(),
    gab.revised_at.clone().into(),
    gab.expires_at.clone().into(),
    gab.in_reply_to_id.clone().into(),
    gab.in_reply_to_account_id.clone().into(),
    gab.sensitive.into(),
    gab.spoiler_text.clone().into(),
    gab.visibility.clone().into(),
    gab.language.clone().into(),
    gab.uri.clone().into(),
    gab.url.clone().into(),
    gab.replies_count.into(),
    gab.reblogs_count.into(),
    gab.favourites_count.into(),
    gab.pinnable.into(),
    gab.pinnable_by_group.into(),
    gab.quote_of_id.clone().into(),
    gab.has_quote.into(),
    gab.reblog.as_ref().map(|v| v.to_string()).into(),
    gab.content.clone().into(),
    gab.rich_content.clone().into(),
    gab.plain_markdown.clone().into(),
    gab.account.id.clone().into(),
    gab.group.as_ref().map(|g| g.id.clone()).into(),
    gab.card.as_ref().map(|c| c.id.clone()).into(),
    embedded.into(),
    file_id.into(),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{model::decode_line, testdata::SAMPLE_GAB};

  fn sample() -> Gab {
    decode_line(SAMPLE_GAB).expect("sample gab decodes")
  }

  fn ctx(file_id: i64, gab: &Gab) -> MapContext<'_> {
    MapContext { file_id, gab_id: &gab.id }
  }

  #[test]
  fn account_maps_profile_fields_in_order() {
    let gab = sample();
    let out = map_account(ctx(7, &gab), &gab.account);

    let fields = out.rows(Table::AccountFields);
    assert_eq!(fields.len(), 2);
    // ordering column is 1-based and follows source order
    assert_eq!(fields[0][2], SqlValue::Integer(1));
    assert_eq!(fields[1][2], SqlValue::Integer(2));
    assert_eq!(fields[0][3], SqlValue::Text("website".into()));

    let accounts = out.rows(Table::Account);
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0][0], SqlValue::Text("3000061".into()));
    // _file_id is the final column
    assert_eq!(accounts[0].last(), Some(&SqlValue::Integer(7)));
  }

  #[test]
  fn account_emoji_rows_link_by_shortcode() {
    let gab = sample();
    let out = map_account(ctx(1, &gab), &gab.account);

    assert_eq!(out.rows(Table::Emoji).len(), 1);
    let links = out.rows(Table::AccountEmoji);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0][0], SqlValue::Text("3000061".into()));
    assert_eq!(links[0][2], SqlValue::Text("pepe".into()));
  }

  #[test]
  fn group_without_category_gets_null_reference() {
    let mut gab = sample();
    let mut group = gab.group.take().expect("sample has a group");
    group.group_category = None;
    group.tags = None;

    let out = map_group(ctx(1, &gab), &group);
    assert!(out.rows(Table::GroupCategory).is_empty());
    assert!(out.rows(Table::GroupTag).is_empty());
    // column 7 is the group_category reference
    assert_eq!(out.rows(Table::GabGroup)[0][7], SqlValue::Null);
  }

  #[test]
  fn group_with_category_emits_category_row_and_reference() {
    let gab = sample();
    let group = gab.group.as_ref().expect("sample has a group");

    let out = map_group(ctx(1, &gab), group);
    let categories = out.rows(Table::GroupCategory);
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0][0], SqlValue::Integer(12));
    assert_eq!(out.rows(Table::GabGroup)[0][7], SqlValue::Integer(12));
    assert_eq!(out.rows(Table::GroupTag).len(), 2);
  }

  #[test]
  fn media_emits_attachment_and_link_rows() {
    let gab = sample();

    let out = map_media(ctx(1, &gab), &gab.media_attachments[0]);
    assert_eq!(out.rows(Table::MediaAttachment).len(), 1);
    let links = out.rows(Table::GabMediaAttachment);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0][0], SqlValue::Text(gab.id.clone()));
    assert_eq!(links[0][1], SqlValue::Text("117902".into()));
  }

  #[test]
  fn gab_row_references_mapped_entities() {
    let gab = sample();
    let row = gab_row(3, &gab, false);

    assert_eq!(row[0], SqlValue::Text(gab.id.clone()));
    // account_id, group_id, card_id sit just before the trailing
    // _embedded_gab and _file_id columns
    let n = row.len();
    assert_eq!(row[n - 5], SqlValue::Text("3000061".into()));
    assert_eq!(row[n - 4], SqlValue::Text("g100".into()));
    assert_eq!(row[n - 3], SqlValue::Text("c200".into()));
    assert_eq!(row[n - 2], SqlValue::Integer(0));
    assert_eq!(row[n - 1], SqlValue::Integer(3));
  }

  #[test]
  fn gab_row_marks_embedded() {
    let gab = sample();
    let row = gab_row(3, &gab, true);
    let n = row.len();
    assert_eq!(row[n - 2], SqlValue::Integer(1));
  }
}
