//! Article records: the lenient wire shape and its canonical normalized form.
//!
//! DESIGN
//! ======
//! The backend is inconsistent about field naming (`createdAt` vs
//! `created_at`), about whether a list row carries `excerpt` or only
//! `content`, and about counter types. [`ArticleRecord::normalize`] resolves
//! every variant exactly once, right after fetch, so filtering and sorting
//! code downstream only ever sees [`Article`].

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::de::{id_from_string_or_number, lenient_count, lenient_status, lenient_tags, lenient_text, text_or_default};

/// Maximum excerpt length (in chars) derived from `content` when the record
/// has no explicit excerpt.
pub const DERIVED_EXCERPT_CHARS: usize = 160;

/// Publication state of an article.
///
/// Values outside the known set map to [`ArticleStatus::Other`], which renders
/// with neutral styling instead of failing the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Published,
    Draft,
    Review,
    #[serde(other)]
    Other,
}

impl ArticleStatus {
    /// Every filterable status, in dashboard display order.
    pub const KNOWN: [Self; 3] = [Self::Published, Self::Draft, Self::Review];

    /// Parse a wire/status-filter value; unknown strings yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "published" => Some(Self::Published),
            "draft" => Some(Self::Draft),
            "review" => Some(Self::Review),
            _ => None,
        }
    }

    /// Machine value used for `<option value>` and query strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::Review => "review",
            Self::Other => "other",
        }
    }

    /// Human label for status badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
            Self::Review => "In Review",
            Self::Other => "Unknown",
        }
    }

    /// BEM modifier for the badge class; `Other` gets the neutral style.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Published => "status-badge--published",
            Self::Draft => "status-badge--draft",
            Self::Review => "status-badge--review",
            Self::Other => "status-badge--neutral",
        }
    }
}

/// Author as the backend embeds it: a bare name or a populated profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorField {
    Name(String),
    Profile {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        email: Option<String>,
    },
}

impl AuthorField {
    fn display(self) -> Option<String> {
        let raw = match self {
            Self::Name(name) => Some(name),
            Self::Profile { name, email } => name.filter(|n| !n.trim().is_empty()).or(email),
        };
        raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
    }
}

/// Article exactly as received from the backend.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ArticleRecord {
    #[serde(alias = "_id", deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "text_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<ArticleStatus>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub views: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub likes: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub comments: Option<u64>,
    #[serde(default, rename = "readingTime", deserialize_with = "lenient_count")]
    pub reading_time_camel: Option<u64>,
    #[serde(default, rename = "reading_time", deserialize_with = "lenient_count")]
    pub reading_time_snake: Option<u64>,
    #[serde(default, rename = "createdAt")]
    pub created_at_camel: Option<String>,
    #[serde(default, rename = "created_at")]
    pub created_at_snake: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at_camel: Option<String>,
    #[serde(default, rename = "updated_at")]
    pub updated_at_snake: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at_camel: Option<String>,
    #[serde(default, rename = "published_at")]
    pub published_at_snake: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub author: Option<AuthorField>,
}

/// Canonical article snapshot consumed by presenters and views.
#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub status: ArticleStatus,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub reading_time: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub author: Option<String>,
}

impl ArticleRecord {
    /// Resolve naming variants and defaults into a canonical [`Article`].
    #[must_use]
    pub fn normalize(self) -> Article {
        let excerpt = self
            .excerpt
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map_or_else(|| derive_excerpt(self.content.as_deref().unwrap_or_default()), str::to_owned);

        Article {
            id: self.id,
            title: self.title,
            excerpt,
            content: self.content,
            status: self.status.unwrap_or(ArticleStatus::Other),
            views: self.views.unwrap_or(0),
            likes: self.likes.unwrap_or(0),
            comments: self.comments.unwrap_or(0),
            reading_time: self.reading_time_camel.or(self.reading_time_snake),
            created_at: first_timestamp(self.created_at_camel, self.created_at_snake),
            updated_at: first_timestamp(self.updated_at_camel, self.updated_at_snake),
            published_at: first_timestamp(self.published_at_camel, self.published_at_snake),
            tags: self.tags.unwrap_or_default(),
            author: self.author.and_then(AuthorField::display),
        }
    }
}

/// Normalize a whole fetched batch, preserving backend order.
#[must_use]
pub fn normalize_articles(records: Vec<ArticleRecord>) -> Vec<Article> {
    records.into_iter().map(ArticleRecord::normalize).collect()
}

/// `data` payload of `GET /users/articles?category={id}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ArticleList {
    #[serde(default)]
    pub articles: Vec<ArticleRecord>,
}

/// `data` payload of `GET /users/articles/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ArticleDetail {
    pub article: ArticleRecord,
}

/// Pick the first present naming variant, then parse it.
fn first_timestamp(camel: Option<String>, snake: Option<String>) -> Option<DateTime<Utc>> {
    camel.or(snake).as_deref().and_then(parse_timestamp)
}

/// Parse the timestamp formats the backend is known to emit.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn derive_excerpt(content: &str) -> String {
    let content = content.trim();
    let mut chars = content.char_indices();
    match chars.nth(DERIVED_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}…", content[..cut].trim_end()),
        None => content.to_owned(),
    }
}
