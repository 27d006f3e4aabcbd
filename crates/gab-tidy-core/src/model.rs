//! Typed representation of one line of Gab archive JSON.
//!
//! Each struct mirrors one JSON entity as the archiver emits it. A missing
//! key is a deserialization error — the loader treats that as a mapping
//! failure for the whole line — while an explicit `null` simply becomes
//! `None`. The one list-valued irregularity the archiver is known to emit
//! is `mentions: null`, which is read as an empty list; the key itself is
//! still required.

use serde::{Deserialize, Deserializer};

use crate::error::{LineError, Result};

/// A custom emoji glyph, referenced by shortcode from accounts and gabs.
#[derive(Debug, Clone, Deserialize)]
pub struct Emoji {
  pub shortcode:  String,
  pub url:        Option<String>,
  pub static_url: Option<String>,
}

/// One user-supplied profile key/value pair. Order within the profile is
/// meaningful and is preserved via an ordering column on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountField {
  pub name:        Option<String>,
  pub value:       Option<String>,
  pub verified_at: Option<String>,
}

/// The posting identity attached to a gab.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
  pub id:              String,
  pub username:        Option<String>,
  pub acct:            Option<String>,
  pub display_name:    Option<String>,
  pub locked:          bool,
  pub bot:             bool,
  pub created_at:      Option<String>,
  pub note:            Option<String>,
  pub url:             Option<String>,
  pub avatar:          Option<String>,
  pub avatar_static:   Option<String>,
  pub header:          Option<String>,
  pub header_static:   Option<String>,
  pub is_spam:         bool,
  pub followers_count: i64,
  pub following_count: i64,
  pub statuses_count:  i64,
  pub is_pro:          bool,
  pub is_verified:     bool,
  pub is_donor:        bool,
  pub is_investor:     bool,
  pub fields:          Vec<AccountField>,
  pub emojis:          Vec<Emoji>,
}

/// Topic classification a group may carry.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupCategory {
  pub id:         i64,
  pub created_at: Option<String>,
  pub updated_at: Option<String>,
  pub text:       Option<String>,
}

/// A community/channel a gab may be posted into.
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
  pub id:               String,
  pub title:            Option<String>,
  pub slug:             Option<String>,
  pub url:              Option<String>,
  pub description:      Option<String>,
  pub description_html: Option<String>,
  pub cover_image_url:  Option<String>,
  pub is_archived:      bool,
  pub is_private:       bool,
  pub is_visible:       bool,
  pub member_count:     Option<i64>,
  pub created_at:       Option<String>,
  pub has_password:     bool,
  pub group_category:   Option<GroupCategory>,
  /// The archiver emits `null` rather than `[]` for untagged groups.
  pub tags:             Option<Vec<String>>,
}

/// An image/video/audio asset attached to a gab.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaAttachment {
  pub id:                String,
  #[serde(rename = "type")]
  pub kind:              Option<String>,
  pub url:               Option<String>,
  pub preview_url:       Option<String>,
  pub source_mp4:        Option<String>,
  pub remote_url:        Option<String>,
  pub text_url:          Option<String>,
  pub description:       Option<String>,
  pub blurhash:          Option<String>,
  pub file_content_type: Option<String>,
}

/// A link-preview/embed card.
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
  pub id:            String,
  pub url:           Option<String>,
  pub title:         Option<String>,
  pub description:   Option<String>,
  #[serde(rename = "type")]
  pub kind:          Option<String>,
  pub provider_name: Option<String>,
  pub provider_url:  Option<String>,
  pub html:          Option<String>,
  pub image:         Option<String>,
  pub embed_url:     Option<String>,
  pub updated_at:    Option<String>,
}

/// A hashtag on a gab.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
  pub name: Option<String>,
  pub url:  Option<String>,
}

/// A reference to another account mentioned in a gab's body.
#[derive(Debug, Clone, Deserialize)]
pub struct Mention {
  pub id:   String,
  pub url:  Option<String>,
  pub acct: Option<String>,
}

/// One post record — the unit of ingestion.
///
/// `quote` recursively embeds another full gab; quote-of-quote chains are
/// handled by the assembler. Acyclicity is an assumed property of the
/// archive format, not something this crate detects.
#[derive(Debug, Clone, Deserialize)]
pub struct Gab {
  pub id:                     String,
  pub created_at:             Option<String>,
  pub revised_at:             Option<String>,
  pub expires_at:             Option<String>,
  pub in_reply_to_id:         Option<String>,
  pub in_reply_to_account_id: Option<String>,
  pub sensitive:              bool,
  pub spoiler_text:           Option<String>,
  pub visibility:             Option<String>,
  pub language:               Option<String>,
  pub uri:                    Option<String>,
  pub url:                    Option<String>,
  pub replies_count:          i64,
  pub reblogs_count:          i64,
  pub favourites_count:       i64,
  pub pinnable:               bool,
  pub pinnable_by_group:      bool,
  pub quote_of_id:            Option<String>,
  pub has_quote:              bool,
  /// Shape varies across archive vintages; stored as serialized JSON text.
  pub reblog:                 Option<serde_json::Value>,
  pub content:                Option<String>,
  pub rich_content:           Option<String>,
  pub plain_markdown:         Option<String>,
  pub account:                Account,
  pub group:                  Option<Group>,
  pub card:                   Option<Card>,
  pub media_attachments:      Vec<MediaAttachment>,
  pub tags:                   Vec<Tag>,
  #[serde(deserialize_with = "null_to_empty")]
  pub mentions:               Vec<Mention>,
  pub emojis:                 Vec<Emoji>,
  pub quote:                  Option<Box<Gab>>,
}

/// The archiver emits `null` rather than `[]` for some empty lists.
fn null_to_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode one input line into a typed [`Gab`].
///
/// Decoding is two-phase so the caller can tell a line that is not JSON
/// apart from a JSON object that is not a gab. Unknown extra keys are
/// ignored in both phases.
pub fn decode_line(line: &str) -> Result<Gab> {
  let value: serde_json::Value =
    serde_json::from_str(line).map_err(LineError::Json)?;
  serde_json::from_value(value).map_err(LineError::Map)
}
