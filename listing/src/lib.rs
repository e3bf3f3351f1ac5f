//! List presentation for fetched article collections.
//!
//! This crate is UI-framework agnostic so the Leptos client can derive a
//! display-ready ordering from raw records without any view code involved.
//! Every function here takes the source collection by reference and returns a
//! fresh `Vec`; the caller's snapshot is never reordered in place.

use std::cmp::Ordering;

use records::{Article, ArticleStatus};
use serde::{Deserialize, Serialize};

/// Status filter applied before sorting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ArticleStatus),
}

impl StatusFilter {
    /// Parse a `<select>` value; anything unrecognized shows every article.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        ArticleStatus::parse(raw).map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    #[must_use]
    pub fn matches(self, status: ArticleStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Sort order for article lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Most recently updated first.
    #[default]
    Updated,
    /// Most recently created first.
    Created,
    /// Title, A to Z.
    Title,
    /// Most viewed first.
    Views,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Updated, Self::Created, Self::Title, Self::Views];

    /// Parse a `<select>` value; anything unrecognized falls back to `Updated`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "created" => Self::Created,
            "title" => Self::Title,
            "views" => Self::Views,
            _ => Self::Updated,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::Created => "created",
            Self::Title => "title",
            Self::Views => "views",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Updated => "Last updated",
            Self::Created => "Newest",
            Self::Title => "Title",
            Self::Views => "Most viewed",
        }
    }
}

/// Search, filter, and sort parameters for one rendering of a list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort: SortKey,
}

impl ListQuery {
    /// `true` when the query would hide nothing.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search.trim().is_empty() && self.status == StatusFilter::All
    }
}

/// Case-insensitive substring search over title and excerpt.
#[must_use]
pub fn matches_search(article: &Article, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    article.title.to_lowercase().contains(&needle) || article.excerpt.to_lowercase().contains(&needle)
}

/// Both the search term and the status filter must hold.
#[must_use]
pub fn matches_query(article: &Article, query: &ListQuery) -> bool {
    query.status.matches(article.status) && matches_search(article, &query.search)
}

/// Filter then sort `articles`, returning a new ordered sequence.
#[must_use]
pub fn present(articles: &[Article], query: &ListQuery) -> Vec<Article> {
    let mut visible: Vec<Article> = articles
        .iter()
        .filter(|article| matches_query(article, query))
        .cloned()
        .collect();
    sort_articles(&mut visible, query.sort);
    visible
}

/// Stable in-place sort of an owned working copy.
pub fn sort_articles(articles: &mut [Article], key: SortKey) {
    match key {
        SortKey::Updated => articles.sort_by(|a, b| newest_first(a.updated_at, b.updated_at)),
        SortKey::Created => articles.sort_by(|a, b| newest_first(a.created_at, b.created_at)),
        SortKey::Title => articles.sort_by(|a, b| collate(&a.title, &b.title)),
        SortKey::Views => articles.sort_by(|a, b| b.views.cmp(&a.views)),
    }
}

/// Descending by timestamp; records without one sink to the end.
fn newest_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Human-oriented title ordering: case-folded first, raw text as tiebreak so
/// the order stays total and deterministic.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a.trim().to_lowercase().cmp(&b.trim().to_lowercase());
    folded.then_with(|| a.cmp(b))
}

/// Aggregate counters shown above the writer's article list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArticleStats {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
    pub in_review: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
}

impl ArticleStats {
    #[must_use]
    pub fn from_articles(articles: &[Article]) -> Self {
        articles.iter().fold(Self::default(), |mut stats, article| {
            stats.total += 1;
            match article.status {
                ArticleStatus::Published => stats.published += 1,
                ArticleStatus::Draft => stats.drafts += 1,
                ArticleStatus::Review => stats.in_review += 1,
                ArticleStatus::Other => {}
            }
            stats.total_views = stats.total_views.saturating_add(article.views);
            stats.total_likes = stats.total_likes.saturating_add(article.likes);
            stats.total_comments = stats.total_comments.saturating_add(article.comments);
            stats
        })
    }
}
