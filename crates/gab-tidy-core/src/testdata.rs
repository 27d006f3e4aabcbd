//! Shared test fixture: one fully-populated gab record in the shape the
//! archiver emits.

pub(crate) const SAMPLE_GAB: &str = r#"{
  "id": "105705193731268204",
  "created_at": "2021-02-08T03:31:12.954Z",
  "revised_at": null,
  "expires_at": null,
  "in_reply_to_id": null,
  "in_reply_to_account_id": null,
  "sensitive": false,
  "spoiler_text": "",
  "visibility": "public",
  "language": "en",
  "uri": "https://gab.com/someuser/posts/105705193731268204",
  "url": "https://gab.com/someuser/posts/105705193731268204",
  "replies_count": 3,
  "reblogs_count": 1,
  "favourites_count": 12,
  "pinnable": false,
  "pinnable_by_group": false,
  "quote_of_id": null,
  "has_quote": false,
  "reblog": null,
  "content": "<p>hello world</p>",
  "rich_content": null,
  "plain_markdown": null,
  "account": {
    "id": "3000061",
    "username": "someuser",
    "acct": "someuser",
    "display_name": "Some User",
    "locked": false,
    "bot": false,
    "created_at": "2019-03-01T00:00:00.000Z",
    "note": "<p>bio text</p>",
    "url": "https://gab.com/someuser",
    "avatar": "https://media.example/avatar.jpg",
    "avatar_static": "https://media.example/avatar.jpg",
    "header": "https://media.example/header.jpg",
    "header_static": "https://media.example/header.jpg",
    "is_spam": false,
    "followers_count": 120,
    "following_count": 80,
    "statuses_count": 4521,
    "is_pro": false,
    "is_verified": false,
    "is_donor": true,
    "is_investor": false,
    "fields": [
      { "name": "website", "value": "example.com", "verified_at": null },
      { "name": "location", "value": "nowhere", "verified_at": null }
    ],
    "emojis": [
      {
        "shortcode": "pepe",
        "url": "https://media.example/pepe.png",
        "static_url": "https://media.example/pepe.png"
      }
    ]
  },
  "group": {
    "id": "g100",
    "title": "News Watch",
    "slug": "news-watch",
    "url": "https://gab.com/groups/g100",
    "description": "watching the news",
    "description_html": "<p>watching the news</p>",
    "cover_image_url": "https://media.example/cover.jpg",
    "is_archived": false,
    "is_private": false,
    "is_visible": true,
    "member_count": 5120,
    "created_at": "2020-06-01T00:00:00.000Z",
    "has_password": false,
    "group_category": {
      "id": 12,
      "created_at": "2020-01-01T00:00:00.000Z",
      "updated_at": "2020-01-01T00:00:00.000Z",
      "text": "News"
    },
    "tags": ["news", "politics"]
  },
  "card": {
    "id": "c200",
    "url": "https://news.example/story",
    "title": "A story",
    "description": "Summary of the story",
    "type": "link",
    "provider_name": "news.example",
    "provider_url": "https://news.example",
    "html": "",
    "image": "https://news.example/story.jpg",
    "embed_url": null,
    "updated_at": "2021-02-08T03:00:00.000Z"
  },
  "media_attachments": [
    {
      "id": "117902",
      "type": "image",
      "url": "https://media.example/117902.jpg",
      "preview_url": "https://media.example/117902_small.jpg",
      "source_mp4": null,
      "remote_url": null,
      "text_url": null,
      "description": "a picture",
      "blurhash": "UBL_:rOpGG",
      "file_content_type": "image/jpeg"
    }
  ],
  "tags": [
    { "name": "maga", "url": "https://gab.com/tags/maga" }
  ],
  "mentions": [
    { "id": "4000777", "url": "https://gab.com/otheruser", "acct": "otheruser" }
  ],
  "emojis": [
    {
      "shortcode": "pepe",
      "url": "https://media.example/pepe.png",
      "static_url": "https://media.example/pepe.png"
    }
  ],
  "quote": null
}"#;
