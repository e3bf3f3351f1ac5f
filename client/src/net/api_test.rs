use super::*;
use records::ArticleStatus;
use serde_json::json;

const BASE: &str = "https://api.inkly.dev";

fn category(id: &str, slug: &str) -> Category {
    Category {
        id: id.to_owned(),
        slug: slug.to_owned(),
        name: slug.to_uppercase(),
        description: None,
        color: None,
        article_count: None,
    }
}

// =============================================================
// Endpoints and credentials
// =============================================================

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(writer_articles_url(BASE), "https://api.inkly.dev/writer/articles");
    assert_eq!(categories_url(BASE), "https://api.inkly.dev/users/categories");
    assert_eq!(
        category_articles_url(BASE, "c1"),
        "https://api.inkly.dev/users/articles?category=c1"
    );
    assert_eq!(article_url(BASE, "a9"), "https://api.inkly.dev/users/articles/a9");
    assert_eq!(login_url(BASE), "https://api.inkly.dev/auth/login");
    assert_eq!(me_url(BASE), "https://api.inkly.dev/auth/me");
}

#[test]
fn endpoints_percent_encode_ids() {
    assert_eq!(
        article_url(BASE, "../auth/me?x=1"),
        "https://api.inkly.dev/users/articles/..%2Fauth%2Fme%3Fx%3D1"
    );
    assert_eq!(
        category_articles_url(BASE, "c 1&admin=true"),
        "https://api.inkly.dev/users/articles?category=c%201%26admin%3Dtrue"
    );
}

#[test]
fn bearer_header_present_only_with_token() {
    assert_eq!(bearer_header(Some("abc")), Some("Bearer abc".to_owned()));
    assert_eq!(bearer_header(Some("  ")), None);
    assert_eq!(bearer_header(None), None);
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn writer_articles_accept_bare_array() {
    let body = json!({
        "success": true,
        "data": [
            { "_id": "a1", "title": "One", "status": "draft", "updated_at": "2024-01-01T00:00:00Z" },
            { "_id": "a2", "title": "Two", "status": "published" }
        ]
    })
    .to_string();
    let articles = decode_writer_articles(200, &body).unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].status, ArticleStatus::Draft);
    assert!(articles[0].updated_at.is_some());
}

#[test]
fn writer_articles_accept_wrapped_list() {
    let body = json!({ "success": true, "data": { "articles": [{ "id": "a1", "title": "One" }] } }).to_string();
    let articles = decode_writer_articles(200, &body).unwrap();
    assert_eq!(articles[0].id, "a1");
}

#[test]
fn server_error_surfaces_as_fetch_error() {
    let err = decode_article_list(500, "").unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "request failed: 500");
}

#[test]
fn empty_article_list_is_ok_not_error() {
    let body = json!({ "success": true, "data": { "articles": [] } }).to_string();
    let articles = decode_article_list(200, &body).unwrap();
    assert!(articles.is_empty());
}

#[test]
fn categories_decode_from_nested_payload() {
    let body = json!({
        "success": true,
        "data": { "categories": [{ "id": "c1", "slug": "tech", "name": "Tech" }] }
    })
    .to_string();
    let categories = decode_categories(200, &body).unwrap();
    assert_eq!(categories[0].slug, "tech");
}

#[test]
fn article_detail_normalizes_record() {
    let body = json!({
        "success": true,
        "data": { "article": { "id": "a1", "title": "Deep dive", "content": "Body text", "views": 3 } }
    })
    .to_string();
    let article = decode_article(200, &body).unwrap();
    assert_eq!(article.excerpt, "Body text");
    assert_eq!(article.views, 3);
}

#[test]
fn current_user_may_be_absent() {
    let body = json!({ "success": true, "data": {} }).to_string();
    assert_eq!(decode_current_user(200, &body).unwrap(), None);
}

#[test]
fn rejected_envelope_message_reaches_caller() {
    let body = json!({ "success": false, "message": "Session expired" }).to_string();
    let err = decode_writer_articles(200, &body).unwrap_err();
    assert_eq!(err.to_string(), "Session expired");
}

// =============================================================
// Category resolution
// =============================================================

#[test]
fn select_category_returns_match() {
    let batch = vec![category("c1", "tech"), category("c2", "life")];
    assert_eq!(select_category(&batch, "life").unwrap().id, "c2");
}

#[test]
fn select_category_missing_slug_is_not_found() {
    let batch = vec![category("c1", "tech"), category("c2", "life")];
    let err = select_category(&batch, "music").unwrap_err();
    assert_eq!(err, CategoryLoadError::NotFound);
    assert_eq!(err.to_string(), "Category not found");
}

#[test]
fn category_load_error_wraps_fetch_message() {
    let err = CategoryLoadError::from(FetchError::Rejected("Maintenance".to_owned()));
    assert_eq!(err.to_string(), "Maintenance");
}
