use super::*;
use serde_json::json;

fn categories() -> Vec<Category> {
    serde_json::from_value::<CategoryList>(json!({
        "categories": [
            { "_id": "c1", "slug": "tech", "name": "Tech", "articleCount": 3 },
            { "id": 2, "slug": "life", "name": "Life", "article_count": 0, "color": "#ff8800" }
        ]
    }))
    .unwrap()
    .categories
}

#[test]
fn category_list_accepts_both_count_spellings() {
    let list = categories();
    assert_eq!(list[0].article_count, Some(3));
    assert_eq!(list[1].id, "2");
    assert_eq!(list[1].article_count, Some(0));
    assert_eq!(list[1].color.as_deref(), Some("#ff8800"));
}

#[test]
fn resolve_category_finds_exact_slug() {
    let list = categories();
    let found = resolve_category(&list, "life").unwrap();
    assert_eq!(found.id, "2");
}

#[test]
fn resolve_category_missing_slug_is_not_found() {
    let list = categories();
    let err = resolve_category(&list, "music").unwrap_err();
    assert_eq!(err, CategoryLookupError::NotFound { slug: "music".to_owned() });
    assert_eq!(err.to_string(), "Category not found");
}

#[test]
fn resolve_category_is_case_sensitive() {
    let list = categories();
    assert!(resolve_category(&list, "Tech").is_err());
}

#[test]
fn resolve_category_on_empty_batch_is_not_found() {
    assert!(resolve_category(&[], "tech").is_err());
}
