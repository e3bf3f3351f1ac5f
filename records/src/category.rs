//! Category records and slug resolution.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use serde::{Deserialize, Serialize};

use crate::de::{id_from_string_or_number, lenient_count};

/// A reader-facing article category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "_id", deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(
        default,
        rename = "articleCount",
        alias = "article_count",
        deserialize_with = "lenient_count"
    )]
    pub article_count: Option<u64>,
}

/// `data` payload of `GET /users/categories`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CategoryList {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Error returned by [`resolve_category`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CategoryLookupError {
    #[error("Category not found")]
    NotFound { slug: String },
}

/// Find the category whose slug matches `slug` exactly (case-sensitive).
///
/// # Errors
///
/// Returns [`CategoryLookupError::NotFound`] when no category carries `slug`.
pub fn resolve_category<'a>(categories: &'a [Category], slug: &str) -> Result<&'a Category, CategoryLookupError> {
    categories
        .iter()
        .find(|category| category.slug == slug)
        .ok_or_else(|| CategoryLookupError::NotFound { slug: slug.to_owned() })
}
