use super::*;
use chrono::{Datelike, Timelike};
use serde_json::json;

fn record(value: serde_json::Value) -> ArticleRecord {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// Status
// =============================================================

#[test]
fn status_known_values_deserialize() {
    let status: ArticleStatus = serde_json::from_value(json!("review")).unwrap();
    assert_eq!(status, ArticleStatus::Review);
}

#[test]
fn status_unknown_value_degrades_to_other() {
    let status: ArticleStatus = serde_json::from_value(json!("archived")).unwrap();
    assert_eq!(status, ArticleStatus::Other);
    assert_eq!(status.css_modifier(), "status-badge--neutral");
    assert_eq!(status.label(), "Unknown");
}

#[test]
fn status_parse_rejects_unknown_filter_values() {
    assert_eq!(ArticleStatus::parse("Published"), Some(ArticleStatus::Published));
    assert_eq!(ArticleStatus::parse("archived"), None);
}

// =============================================================
// Normalization
// =============================================================

#[test]
fn normalize_prefers_camel_case_timestamp_when_both_present() {
    let article = record(json!({
        "id": "a1",
        "title": "Hello",
        "updatedAt": "2024-03-02T10:00:00Z",
        "updated_at": "2020-01-01T00:00:00Z"
    }))
    .normalize();
    let updated = article.updated_at.unwrap();
    assert_eq!(updated.year(), 2024);
    assert_eq!(updated.hour(), 10);
}

#[test]
fn normalize_falls_back_to_snake_case_timestamp() {
    let article = record(json!({
        "id": "a1",
        "created_at": "2023-11-05 08:30:00"
    }))
    .normalize();
    let created = article.created_at.unwrap();
    assert_eq!((created.year(), created.month(), created.day()), (2023, 11, 5));
    assert_eq!(created.minute(), 30);
}

#[test]
fn normalize_parses_plain_dates_and_offsets() {
    assert_eq!(parse_timestamp("2024-01-15").unwrap().day(), 15);
    let shifted = parse_timestamp("2024-01-15T23:30:00+02:00").unwrap();
    assert_eq!(shifted.hour(), 21);
    assert_eq!(parse_timestamp("yesterday"), None);
    assert_eq!(parse_timestamp("   "), None);
}

#[test]
fn normalize_defaults_missing_counters_to_zero() {
    let article = record(json!({ "_id": 42, "title": "Counters", "views": null })).normalize();
    assert_eq!(article.id, "42");
    assert_eq!(article.views, 0);
    assert_eq!(article.likes, 0);
    assert_eq!(article.comments, 0);
}

#[test]
fn normalize_counts_embedded_comment_arrays() {
    let article = record(json!({
        "id": "a1",
        "comments": [{ "body": "nice" }, { "body": "great" }],
        "views": 12.0
    }))
    .normalize();
    assert_eq!(article.comments, 2);
    assert_eq!(article.views, 12);
}

#[test]
fn normalize_unknown_or_missing_status_is_other() {
    assert_eq!(record(json!({ "id": "a" })).normalize().status, ArticleStatus::Other);
    assert_eq!(
        record(json!({ "id": "a", "status": "archived" })).normalize().status,
        ArticleStatus::Other
    );
}

#[test]
fn normalize_derives_excerpt_from_content() {
    let long = "word ".repeat(60);
    let article = record(json!({ "id": "a", "content": long })).normalize();
    assert!(article.excerpt.ends_with('…'));
    assert!(article.excerpt.chars().count() <= DERIVED_EXCERPT_CHARS + 1);

    let short = record(json!({ "id": "b", "excerpt": "  ", "content": "Short body" })).normalize();
    assert_eq!(short.excerpt, "Short body");
}

#[test]
fn normalize_keeps_explicit_excerpt() {
    let article = record(json!({ "id": "a", "excerpt": "Teaser", "content": "Body" })).normalize();
    assert_eq!(article.excerpt, "Teaser");
    assert_eq!(article.content.as_deref(), Some("Body"));
}

#[test]
fn normalize_reading_time_accepts_both_spellings() {
    assert_eq!(record(json!({ "id": "a", "readingTime": 4 })).normalize().reading_time, Some(4));
    assert_eq!(record(json!({ "id": "a", "reading_time": 7 })).normalize().reading_time, Some(7));
}

#[test]
fn normalize_author_from_string_or_profile() {
    assert_eq!(
        record(json!({ "id": "a", "author": "Ada" })).normalize().author.as_deref(),
        Some("Ada")
    );
    assert_eq!(
        record(json!({ "id": "a", "author": { "email": "ada@inkly.dev" } }))
            .normalize()
            .author
            .as_deref(),
        Some("ada@inkly.dev")
    );
    assert_eq!(record(json!({ "id": "a", "author": "  " })).normalize().author, None);
}

#[test]
fn normalize_articles_preserves_order() {
    let records = vec![record(json!({ "id": "2" })), record(json!({ "id": "1" }))];
    let ids: Vec<_> = normalize_articles(records).into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec!["2", "1"]);
}

#[test]
fn article_list_defaults_to_empty() {
    let list: ArticleList = serde_json::from_value(json!({})).unwrap();
    assert!(list.articles.is_empty());
}

// =============================================================
// Malformed rows inside a batch
// =============================================================

fn decode_batch(body: &serde_json::Value) -> Vec<Article> {
    let list = crate::envelope::interpret::<ArticleList>(200, &body.to_string()).unwrap();
    normalize_articles(list.articles)
}

#[test]
fn batch_with_non_string_status_still_decodes() {
    let body = json!({
        "success": true,
        "data": { "articles": [
            { "id": "1", "status": "published" },
            { "id": "2", "status": 7 },
            { "id": "3", "status": { "state": "draft" } },
            { "id": "4", "status": true },
            { "id": "5", "status": null }
        ]}
    });
    let statuses: Vec<_> = decode_batch(&body).into_iter().map(|a| a.status).collect();
    assert_eq!(
        statuses,
        vec![
            ArticleStatus::Published,
            ArticleStatus::Other,
            ArticleStatus::Other,
            ArticleStatus::Other,
            ArticleStatus::Other,
        ]
    );
}

#[test]
fn batch_with_null_title_still_decodes() {
    let body = json!({
        "success": true,
        "data": { "articles": [
            { "id": "1", "title": null },
            { "id": "2", "title": "Kept" }
        ]}
    });
    let titles: Vec<_> = decode_batch(&body).into_iter().map(|a| a.title).collect();
    assert_eq!(titles, vec!["".to_owned(), "Kept".to_owned()]);
}

#[test]
fn batch_tolerates_mistyped_text_and_tags() {
    let body = json!({
        "success": true,
        "data": { "articles": [
            { "id": "1", "excerpt": 42, "content": ["x"], "tags": ["rust", null, 3] },
            { "id": "2", "tags": "rust" }
        ]}
    });
    let articles = decode_batch(&body);
    assert_eq!(articles[0].excerpt, "42");
    assert_eq!(articles[0].content, None);
    assert_eq!(articles[0].tags, vec!["rust".to_owned(), "3".to_owned()]);
    assert!(articles[1].tags.is_empty());
}

#[test]
fn status_wire_value_is_case_insensitive() {
    assert_eq!(record(json!({ "id": "a", "status": " Draft " })).normalize().status, ArticleStatus::Draft);
}
