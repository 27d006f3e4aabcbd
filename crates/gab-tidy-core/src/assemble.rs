//! Recursive assembly of one gab (and its quoted gabs) into row batches.

use crate::{
  map::{
    MapContext, gab_row, map_account, map_card, map_emoji_list, map_group,
    map_media, map_mentions, map_tags,
  },
  model::Gab,
  table::{RowBatches, Table},
};

/// Decompose a gab into row batches for every table it touches.
///
/// Entities the gab references (account, group, media, card, emoji) are
/// mapped before the gab's own row. A quoted gab is assembled first and its
/// entire row set precedes the quoting gab's in every table, recursively
/// and innermost-first, so the flattened result inserts without dangling
/// references. A quoted gab's row is flagged as embedded.
pub fn assemble(file_id: i64, gab: &Gab) -> RowBatches {
  assemble_inner(file_id, gab, false)
}

fn assemble_inner(file_id: i64, gab: &Gab, embedded: bool) -> RowBatches {
  let ctx = MapContext { file_id, gab_id: &gab.id };

  let mut own = RowBatches::new();
  own.append(map_account(ctx, &gab.account));
  if let Some(group) = &gab.group {
    own.append(map_group(ctx, group));
  }
  for media in &gab.media_attachments {
    own.append(map_media(ctx, media));
  }
  own.append(map_tags(ctx, &gab.tags));
  own.append(map_mentions(ctx, &gab.mentions));
  own.append(map_emoji_list(&gab.emojis));
  for emoji in &gab.emojis {
    own.push(Table::GabEmoji, vec![
      gab.id.clone().into(),
      emoji.shortcode.clone().into(),
    ]);
  }
  if let Some(card) = &gab.card {
    own.append(map_card(card));
  }

  // The gab row goes last within its own contribution.
  own.push(Table::Gab, gab_row(file_id, gab, embedded));

  match &gab.quote {
    Some(quoted) => {
      let mut merged = assemble_inner(file_id, quoted, true);
      merged.append(own);
      merged
    }
    None => own,
  }
}
