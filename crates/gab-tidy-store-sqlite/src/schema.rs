//! SQL schema and insert statements for the gab-tidy store.
//!
//! The insert statements bind positional parameters in the exact column
//! order the core mappers emit rows in; this file and the core `map`
//! module should be read and edited together.

use gab_tidy_core::Table;

/// Identifies the relational layout. Stored in `_gab_tidy_data` at
/// initialisation and compared character-for-character on every reuse.
pub const SCHEMA_VERSION: &str = "2021-08-30";

/// Full schema DDL, executed once against an empty database.
///
/// Referenced-by-id columns are annotated with `REFERENCES` for
/// documentation, but foreign-key enforcement is left off: insertion order
/// already guarantees parents land before children, and `insert or
/// replace` on parent tables must not cascade.
pub const SCHEMA: &str = "
CREATE TABLE _gab_tidy_data (
    key    TEXT PRIMARY KEY,
    value  TEXT
);

-- Provenance: one row per ingestion of one input file, append-only. The
-- rowid is stamped into every account/group/gab row produced by that run.
CREATE TABLE _inserted_files (
    id                    INTEGER PRIMARY KEY AUTOINCREMENT,
    filename              TEXT NOT NULL,
    inserted_by_version   TEXT NOT NULL,
    num_gabs_inserted     INTEGER,
    num_parsing_failures  INTEGER,
    inserted_at           TEXT NOT NULL
);

CREATE TABLE emoji (
    shortcode   TEXT PRIMARY KEY,
    url         TEXT,
    static_url  TEXT
);

CREATE TABLE account (
    id               TEXT PRIMARY KEY,
    username         TEXT,
    acct             TEXT,
    display_name     TEXT,
    locked           INTEGER,    -- boolean
    bot              INTEGER,    -- boolean
    created_at       TEXT,       -- ISO datetime
    note             TEXT,
    url              TEXT,
    avatar           TEXT,
    avatar_static    TEXT,
    header           TEXT,
    header_static    TEXT,
    is_spam          INTEGER,    -- boolean
    followers_count  INTEGER,
    following_count  INTEGER,
    statuses_count   INTEGER,
    is_pro           INTEGER,    -- boolean
    is_verified      INTEGER,    -- boolean
    is_donor         INTEGER,    -- boolean
    is_investor      INTEGER,    -- boolean
    _file_id         INTEGER REFERENCES _inserted_files(id)
);

CREATE TABLE account_fields (
    account_id   TEXT REFERENCES account(id),
    _file_id     INTEGER REFERENCES _inserted_files(id),
    ordering     INTEGER,    -- 1-based source order within the profile
    name         TEXT,
    value        TEXT,
    verified_at  TEXT,
    PRIMARY KEY (account_id, ordering)
);

CREATE TABLE account_emoji (
    account_id       TEXT REFERENCES account(id),
    _file_id         INTEGER REFERENCES _inserted_files(id),
    emoji_shortcode  TEXT REFERENCES emoji(shortcode),
    PRIMARY KEY (account_id, emoji_shortcode)
);

CREATE TABLE group_category (
    id          INTEGER PRIMARY KEY,
    created_at  TEXT,
    updated_at  TEXT,
    text        TEXT
);

CREATE TABLE gab_group (
    id                TEXT PRIMARY KEY,
    title             TEXT,
    slug              TEXT,
    url               TEXT,
    description       TEXT,
    description_html  TEXT,
    cover_image_url   TEXT,
    group_category    INTEGER REFERENCES group_category(id),
    is_archived       INTEGER,    -- boolean
    is_private        INTEGER,    -- boolean
    is_visible        INTEGER,    -- boolean
    member_count      INTEGER,
    created_at        TEXT,
    has_password      INTEGER,    -- boolean
    _file_id          INTEGER REFERENCES _inserted_files(id)
);

CREATE TABLE group_tag (
    group_id  TEXT REFERENCES gab_group(id),
    _file_id  INTEGER REFERENCES _inserted_files(id),
    tag       TEXT,
    PRIMARY KEY (group_id, tag)
);

CREATE TABLE media_attachment (
    id                 TEXT PRIMARY KEY,
    type               TEXT,
    file_content_type  TEXT,
    url                TEXT,
    preview_url        TEXT,
    source_mp4         TEXT,
    remote_url         TEXT,
    text_url           TEXT,
    description        TEXT,
    blurhash           TEXT
);

CREATE TABLE card (
    id             TEXT PRIMARY KEY,
    url            TEXT,
    title          TEXT,
    description    TEXT,
    type           TEXT,
    provider_name  TEXT,
    provider_url   TEXT,
    html           TEXT,
    image_url      TEXT,
    embed_url      TEXT,
    updated_at     TEXT
);

CREATE TABLE gab (
    id                      TEXT PRIMARY KEY,
    created_at              TEXT,    -- ISO datetime
    revised_at              TEXT,
    expires_at              TEXT,
    in_reply_to_id          TEXT,
    in_reply_to_account_id  TEXT,
    sensitive               INTEGER,    -- boolean
    spoiler_text            TEXT,
    visibility              TEXT,
    language                TEXT,
    uri                     TEXT,
    url                     TEXT,
    replies_count           INTEGER,
    reblogs_count           INTEGER,
    favourites_count        INTEGER,
    pinnable                INTEGER,    -- boolean
    pinnable_by_group       INTEGER,    -- boolean
    quote_of_id             TEXT,
    has_quote               INTEGER,    -- boolean
    reblog                  TEXT,       -- serialized JSON when present
    content                 TEXT,
    rich_content            TEXT,
    plain_markdown          TEXT,
    account_id              TEXT REFERENCES account(id),
    group_id                TEXT REFERENCES gab_group(id),
    card_id                 TEXT REFERENCES card(id),
    _embedded_gab           INTEGER,    -- boolean: reached only via a quote
    _file_id                INTEGER REFERENCES _inserted_files(id)
);

CREATE TABLE gab_mention (
    gab_id      TEXT REFERENCES gab(id),
    account_id  TEXT,
    url         TEXT,
    acct        TEXT,
    PRIMARY KEY (gab_id, account_id)
);

CREATE TABLE gab_media_attachment (
    gab_id               TEXT REFERENCES gab(id),
    media_attachment_id  TEXT REFERENCES media_attachment(id),
    PRIMARY KEY (gab_id, media_attachment_id)
);

CREATE TABLE gab_tag (
    gab_id  TEXT REFERENCES gab(id),
    name    TEXT,
    url     TEXT,
    PRIMARY KEY (gab_id, name)
);

CREATE TABLE gab_emoji (
    gab_id           TEXT REFERENCES gab(id),
    emoji_shortcode  TEXT REFERENCES emoji(shortcode),
    PRIMARY KEY (gab_id, emoji_shortcode)
);

CREATE INDEX gab_file_idx     ON gab(_file_id);
CREATE INDEX gab_account_idx  ON gab(account_id);
CREATE INDEX gab_created_idx  ON gab(created_at);
";

/// Insert statement for one table, encoding its conflict policy.
///
/// Entity tables keyed by a stable source id take the latest values
/// (`insert or replace`); link and first-wins tables keep the first row
/// seen for a natural key (`insert or ignore`).
pub fn insert_sql(table: Table) -> &'static str {
  match table {
    Table::Emoji => {
      "insert or ignore into emoji (shortcode, url, static_url)
       values (?1, ?2, ?3)"
    }
    Table::Account => {
      "insert or replace into account (
         id, username, acct, display_name,
         locked, bot,
         created_at,
         note, url, avatar, avatar_static, header, header_static,
         is_spam,
         followers_count, following_count, statuses_count,
         is_pro, is_verified, is_donor, is_investor,
         _file_id
       ) values (
         ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
         ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22
       )"
    }
    Table::AccountFields => {
      "insert or ignore into account_fields
         (account_id, _file_id, ordering, name, value, verified_at)
       values (?1, ?2, ?3, ?4, ?5, ?6)"
    }
    Table::AccountEmoji => {
      "insert or ignore into account_emoji
         (account_id, _file_id, emoji_shortcode)
       values (?1, ?2, ?3)"
    }
    Table::GroupCategory => {
      "insert or ignore into group_category (id, created_at, updated_at, text)
       values (?1, ?2, ?3, ?4)"
    }
    Table::GabGroup => {
      "insert or replace into gab_group (
         id, title, slug, url,
         description, description_html, cover_image_url,
         group_category,
         is_archived, is_private, is_visible,
         member_count, created_at, has_password,
         _file_id
       ) values (
         ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15
       )"
    }
    Table::GroupTag => {
      "insert or ignore into group_tag (group_id, _file_id, tag)
       values (?1, ?2, ?3)"
    }
    Table::MediaAttachment => {
      "insert or replace into media_attachment (
         id, type, file_content_type,
         url, preview_url, source_mp4, remote_url, text_url,
         description, blurhash
       ) values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
    }
    Table::Card => {
      "insert or ignore into card (
         id, url, title, description, type,
         provider_name, provider_url,
         html, image_url, embed_url, updated_at
       ) values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"
    }
    Table::Gab => {
      "insert or replace into gab (
         id,
         created_at, revised_at, expires_at,
         in_reply_to_id, in_reply_to_account_id,
         sensitive, spoiler_text, visibility, language,
         uri, url,
         replies_count, reblogs_count, favourites_count,
         pinnable, pinnable_by_group,
         quote_of_id, has_quote, reblog,
         content, rich_content, plain_markdown,
         account_id, group_id, card_id,
         _embedded_gab, _file_id
       ) values (
         ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
         ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26,
         ?27, ?28
       )"
    }
    Table::GabMention => {
      "insert or ignore into gab_mention (gab_id, account_id, url, acct)
       values (?1, ?2, ?3, ?4)"
    }
    Table::GabMediaAttachment => {
      "insert or ignore into gab_media_attachment
         (gab_id, media_attachment_id)
       values (?1, ?2)"
    }
    Table::GabTag => {
      "insert or ignore into gab_tag (gab_id, name, url)
       values (?1, ?2, ?3)"
    }
    Table::GabEmoji => {
      "insert or ignore into gab_emoji (gab_id, emoji_shortcode)
       values (?1, ?2)"
    }
  }
}
