//! Category page: resolve a slug, then list that category's articles.
//!
//! SYSTEM CONTEXT
//! ==============
//! A slug that matches no category is a terminal "not found" state with no
//! retry. A found category with zero articles is a normal empty listing.
//! Navigating to another slug starts a fresh fetch; the request ticket in
//! `FetchState` drops any reply still in flight for the previous slug.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use records::FetchError;

use crate::components::article_card::ArticleCard;
use crate::components::empty_state::EmptyState;
use crate::components::error_panel::ErrorPanel;
use crate::components::loading::LoadingIndicator;
use crate::net::api::{self, CategoryListing, CategoryLoadError};
use crate::state::fetch::{FetchState, spawn_fetch};

/// Settled outcome of a category lookup that did not fail.
#[derive(Clone, Debug, PartialEq)]
pub enum CategoryResolution {
    Found(CategoryListing),
    NotFound { slug: String },
}

/// Split "not found" out of the error channel so it renders as its own state.
fn into_resolution(slug: &str, result: Result<CategoryListing, CategoryLoadError>) -> Result<CategoryResolution, FetchError> {
    match result {
        Ok(listing) => Ok(CategoryResolution::Found(listing)),
        Err(CategoryLoadError::NotFound) => Ok(CategoryResolution::NotFound { slug: slug.to_owned() }),
        Err(CategoryLoadError::Fetch(err)) => Err(err),
    }
}

async fn load_resolution(slug: String) -> Result<CategoryResolution, FetchError> {
    let result = api::load_category(&slug).await;
    into_resolution(&slug, result)
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug").unwrap_or_default()));
    let resolution = RwSignal::new(FetchState::<CategoryResolution>::loading());

    let load = move |slug: String| spawn_fetch(resolution, load_resolution(slug));
    Effect::new(move || load(slug.get()));
    let on_retry = Callback::new(move |()| load(slug.get_untracked()));

    view! {
        <section class="category-page">
            {move || {
                let state = resolution.get();
                if state.loading {
                    return view! { <LoadingIndicator label="Loading articles..."/> }.into_any();
                }
                if let Some(message) = state.error {
                    return view! { <ErrorPanel message=message on_retry=on_retry/> }.into_any();
                }
                match state.data {
                    Some(CategoryResolution::Found(listing)) => view! { <CategoryListingView listing=listing/> }.into_any(),
                    Some(CategoryResolution::NotFound { slug }) => {
                        view! {
                            <EmptyState title="Category not found" message=format!("There is no category called \"{slug}\".")>
                                <a class="btn" href="/">"Browse all categories"</a>
                            </EmptyState>
                        }
                            .into_any()
                    }
                    None => view! { <LoadingIndicator label="Loading articles..."/> }.into_any(),
                }
            }}
        </section>
    }
}

#[component]
fn CategoryListingView(listing: CategoryListing) -> impl IntoView {
    let CategoryListing { category, articles } = listing;
    let accent = category.color.clone().map(|color| format!("--category-accent: {color}"));

    view! {
        <header class="page-header" style=accent>
            <h1>{category.name}</h1>
            {category.description.map(|d| view! { <p class="page-header__subtitle">{d}</p> })}
        </header>
        {if articles.is_empty() {
            view! { <EmptyState title="No articles yet" message="Nothing has been published in this category."/> }
                .into_any()
        } else {
            view! {
                <div class="article-list">
                    {articles
                        .into_iter()
                        .map(|article| view! { <ArticleCard article=article/> })
                        .collect::<Vec<_>>()}
                </div>
            }
                .into_any()
        }}
    }
}
