//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these endpoints
//! are only fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, FetchError>`; decoding goes through
//! `records::interpret` so status, envelope, and shape failures are reported
//! uniformly. A successful response with zero rows is `Ok(vec![])`, never an
//! error, so views can tell an empty state from a failed one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{
    Article, ArticleDetail, ArticleList, ArticleRecord, Category, CategoryList, CategoryLookupError, CurrentUser,
    FetchError, LoginGrant, User, interpret, normalize_articles, resolve_category,
};
use serde::Deserialize;

use crate::config::api_base;

/// Whether a request carries the stored bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Credential {
    /// Attach `Authorization: Bearer <token>` when a token is stored.
    Bearer,
    /// Public endpoint; never send the token.
    Public,
}

fn writer_articles_url(base: &str) -> String {
    format!("{base}/writer/articles")
}

fn categories_url(base: &str) -> String {
    format!("{base}/users/categories")
}

fn category_articles_url(base: &str, category_id: &str) -> String {
    format!("{base}/users/articles?category={}", urlencoding::encode(category_id))
}

fn article_url(base: &str, article_id: &str) -> String {
    format!("{base}/users/articles/{}", urlencoding::encode(article_id))
}

fn login_url(base: &str) -> String {
    format!("{base}/auth/login")
}

fn me_url(base: &str) -> String {
    format!("{base}/auth/me")
}

/// `Authorization` header value for a stored token.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}

#[cfg(not(feature = "hydrate"))]
fn server_unavailable() -> FetchError {
    FetchError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<(u16, String), FetchError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
    Ok((status, body))
}

/// `GET url`, returning the status and raw body.
async fn get_raw(url: &str, credential: Credential) -> Result<(u16, String), FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(url);
        let token = match credential {
            Credential::Bearer => crate::util::storage::load_token(),
            Credential::Public => None,
        };
        if let Some(header) = bearer_header(token.as_deref()) {
            request = request.header("Authorization", &header);
        }
        let resp = request
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, credential);
        Err(server_unavailable())
    }
}

/// `POST url` with a JSON body, returning the status and raw body.
async fn post_raw(url: &str, payload: &serde_json::Value) -> Result<(u16, String), FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(payload)
            .map_err(|e| FetchError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, payload);
        Err(server_unavailable())
    }
}

/// The writer endpoint has shipped both a bare array and an
/// `{articles: [...]}` object as its `data`.
#[derive(Deserialize)]
#[serde(untagged)]
enum WriterArticles {
    Bare(Vec<ArticleRecord>),
    Wrapped(ArticleList),
}

fn decode_writer_articles(status: u16, body: &str) -> Result<Vec<Article>, FetchError> {
    let records = match interpret::<WriterArticles>(status, body)? {
        WriterArticles::Bare(records) => records,
        WriterArticles::Wrapped(list) => list.articles,
    };
    Ok(normalize_articles(records))
}

fn decode_categories(status: u16, body: &str) -> Result<Vec<Category>, FetchError> {
    interpret::<CategoryList>(status, body).map(|list| list.categories)
}

fn decode_article_list(status: u16, body: &str) -> Result<Vec<Article>, FetchError> {
    interpret::<ArticleList>(status, body).map(|list| normalize_articles(list.articles))
}

fn decode_article(status: u16, body: &str) -> Result<Article, FetchError> {
    interpret::<ArticleDetail>(status, body).map(|detail| detail.article.normalize())
}

fn decode_current_user(status: u16, body: &str) -> Result<Option<User>, FetchError> {
    interpret::<CurrentUser>(status, body).map(|current| current.user)
}

/// Fetch the signed-in writer's articles from `GET /writer/articles`.
///
/// # Errors
///
/// Returns a [`FetchError`] on transport failure, non-2xx status, or a
/// rejected envelope.
pub async fn fetch_writer_articles() -> Result<Vec<Article>, FetchError> {
    let (status, body) = get_raw(&writer_articles_url(&api_base()), Credential::Bearer).await?;
    decode_writer_articles(status, &body)
}

/// Fetch every category from `GET /users/categories`.
///
/// # Errors
///
/// Returns a [`FetchError`] when the request or envelope fails.
pub async fn fetch_categories() -> Result<Vec<Category>, FetchError> {
    let (status, body) = get_raw(&categories_url(&api_base()), Credential::Public).await?;
    decode_categories(status, &body)
}

/// Fetch the articles in one category from `GET /users/articles?category={id}`.
///
/// # Errors
///
/// Returns a [`FetchError`] when the request or envelope fails.
pub async fn fetch_category_articles(category_id: &str) -> Result<Vec<Article>, FetchError> {
    let url = category_articles_url(&api_base(), category_id);
    let (status, body) = get_raw(&url, Credential::Public).await?;
    decode_article_list(status, &body)
}

/// Fetch one article from `GET /users/articles/{id}`.
///
/// # Errors
///
/// Returns a [`FetchError`] when the request or envelope fails.
pub async fn fetch_article(article_id: &str) -> Result<Article, FetchError> {
    let (status, body) = get_raw(&article_url(&api_base(), article_id), Credential::Public).await?;
    decode_article(status, &body)
}

/// Resolve the stored token to a user via `GET /auth/me`.
///
/// # Errors
///
/// Returns a [`FetchError`] when the token is rejected or the call fails.
pub async fn fetch_current_user() -> Result<Option<User>, FetchError> {
    let (status, body) = get_raw(&me_url(&api_base()), Credential::Bearer).await?;
    decode_current_user(status, &body)
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns a [`FetchError`] when the credentials are rejected or the call fails.
pub async fn login(email: &str, password: &str) -> Result<LoginGrant, FetchError> {
    let payload = serde_json::json!({ "email": email, "password": password });
    let (status, body) = post_raw(&login_url(&api_base()), &payload).await?;
    interpret::<LoginGrant>(status, &body)
}

/// A resolved category together with its articles.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryListing {
    pub category: Category,
    pub articles: Vec<Article>,
}

/// Error returned by [`load_category`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CategoryLoadError {
    /// No category carries the requested slug. Terminal; not an empty list.
    #[error("Category not found")]
    NotFound,
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl From<CategoryLookupError> for CategoryLoadError {
    fn from(_: CategoryLookupError) -> Self {
        Self::NotFound
    }
}

/// Pick the category for `slug` out of a fetched batch.
fn select_category(categories: &[Category], slug: &str) -> Result<Category, CategoryLoadError> {
    Ok(resolve_category(categories, slug)?.clone())
}

/// Resolve `slug` against the full category list, then fetch its articles.
///
/// # Errors
///
/// Returns [`CategoryLoadError::NotFound`] when no category matches `slug`,
/// or [`CategoryLoadError::Fetch`] when either request fails.
pub async fn load_category(slug: &str) -> Result<CategoryListing, CategoryLoadError> {
    let categories = fetch_categories().await?;
    let category = select_category(&categories, slug)?;
    let articles = fetch_category_articles(&category.id).await?;
    Ok(CategoryListing { category, articles })
}
