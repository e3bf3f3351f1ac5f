//! Writer dashboard: the signed-in writer's own articles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind [`RouteGuard`] so only writers reach the fetch. The raw
//! collection stays in a [`FetchState`]; search, status, and sort only feed a
//! derived memo through `listing::present`, so clearing the filters restores
//! the original order without refetching.
//!
//! The filter controls persist to localStorage and survive reloads.

#[cfg(test)]
#[path = "writer_dashboard_test.rs"]
mod writer_dashboard_test;

use leptos::prelude::*;
use listing::{ArticleStats, ListQuery, SortKey, StatusFilter};
use records::{Article, ArticleStatus};

use crate::components::article_card::ArticleCard;
use crate::components::empty_state::EmptyState;
use crate::components::error_panel::ErrorPanel;
use crate::components::loading::LoadingIndicator;
use crate::components::route_guard::RouteGuard;
use crate::config::DASHBOARD_QUERY_KEY;
use crate::net::api;
use crate::state::fetch::{FetchState, spawn_fetch};
use crate::util::format::compact_count;
use crate::util::guard::ProtectedArea;
use crate::util::storage;

/// Which placeholder to show when the presented list has no rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EmptyCopy {
    /// The writer has no articles at all.
    NoArticles,
    /// Articles exist but the current filters hide all of them.
    NoMatches,
}

impl EmptyCopy {
    pub(crate) fn title(self) -> &'static str {
        match self {
            Self::NoArticles => "No articles yet",
            Self::NoMatches => "No matching articles",
        }
    }

    pub(crate) fn message(self) -> &'static str {
        match self {
            Self::NoArticles => "Articles you write will show up here.",
            Self::NoMatches => "Try a different search or status filter.",
        }
    }
}

/// `None` when there is something to list.
pub(crate) fn empty_copy(total: usize, shown: usize, query: &ListQuery) -> Option<EmptyCopy> {
    if shown > 0 {
        return None;
    }
    if total == 0 || query.is_unfiltered() {
        return Some(EmptyCopy::NoArticles);
    }
    Some(EmptyCopy::NoMatches)
}

pub(crate) fn result_summary(total: usize, shown: usize) -> String {
    if shown == total {
        let noun = if total == 1 { "article" } else { "articles" };
        return format!("{total} {noun}");
    }
    format!("Showing {shown} of {total}")
}

/// Route entry point; the guard owns every auth outcome.
#[component]
pub fn WriterDashboardPage() -> impl IntoView {
    view! {
        <RouteGuard area=ProtectedArea::WriterDashboard>
            <WriterDashboard/>
        </RouteGuard>
    }
}

#[component]
fn WriterDashboard() -> impl IntoView {
    let articles = RwSignal::new(FetchState::<Vec<Article>>::loading());
    let query = RwSignal::new(storage::load_json::<ListQuery>(DASHBOARD_QUERY_KEY).unwrap_or_default());

    let load = move || spawn_fetch(articles, api::fetch_writer_articles());
    Effect::new(move || load());
    let on_retry = Callback::new(move |()| load());

    Effect::new(move || {
        query.with(|q| storage::save_json(DASHBOARD_QUERY_KEY, q));
    });

    let presented = Memo::new(move |_| {
        articles.with(|state| {
            state
                .data
                .as_deref()
                .map(|items| query.with(|q| listing::present(items, q)))
                .unwrap_or_default()
        })
    });
    let stats = Memo::new(move |_| {
        articles.with(|state| state.data.as_deref().map(ArticleStats::from_articles).unwrap_or_default())
    });

    let clear_filters = move |_| query.set(ListQuery::default());

    view! {
        <section class="writer-dashboard">
            <header class="page-header">
                <h1>"My Articles"</h1>
                <p class="page-header__subtitle">"Everything you have written, in one place."</p>
            </header>
            <StatsStrip stats=stats/>
            <div class="dashboard-controls">
                <input
                    class="dashboard-search"
                    type="search"
                    placeholder="Search title or excerpt"
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        query.update(|q| q.search = term);
                    }
                />
                <select
                    class="dashboard-select"
                    prop:value=move || query.with(|q| q.status.as_str())
                    on:change=move |ev| {
                        let status = StatusFilter::parse(&event_target_value(&ev));
                        query.update(|q| q.status = status);
                    }
                >
                    <option value="all">"All statuses"</option>
                    {ArticleStatus::KNOWN
                        .iter()
                        .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="dashboard-select"
                    prop:value=move || query.with(|q| q.sort.as_str())
                    on:change=move |ev| {
                        let sort = SortKey::parse(&event_target_value(&ev));
                        query.update(|q| q.sort = sort);
                    }
                >
                    {SortKey::ALL
                        .iter()
                        .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            {move || {
                let (loading, error, total) = articles
                    .with(|state| (state.loading, state.error.clone(), state.data.as_ref().map_or(0, Vec::len)));
                if loading {
                    return view! { <LoadingIndicator label="Loading your articles..."/> }.into_any();
                }
                if let Some(message) = error {
                    return view! { <ErrorPanel message=message on_retry=on_retry/> }.into_any();
                }
                let items = presented.get();
                let empty = query.with(|q| empty_copy(total, items.len(), q));
                match empty {
                    Some(EmptyCopy::NoMatches) => {
                        view! {
                            <EmptyState title=EmptyCopy::NoMatches.title() message=EmptyCopy::NoMatches.message()>
                                <button class="btn" on:click=clear_filters>"Clear filters"</button>
                            </EmptyState>
                        }
                            .into_any()
                    }
                    Some(copy) => view! { <EmptyState title=copy.title() message=copy.message()/> }.into_any(),
                    None => {
                        view! {
                            <p class="dashboard-summary">{result_summary(total, items.len())}</p>
                            <div class="article-list">
                                {items
                                    .into_iter()
                                    .map(|article| view! { <ArticleCard article=article manage=true/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </section>
    }
}

#[component]
fn StatsStrip(stats: Memo<ArticleStats>) -> impl IntoView {
    let tile = move |label: &'static str, value: fn(&ArticleStats) -> String| {
        view! {
            <div class="stat-tile">
                <span class="stat-tile__value">{move || stats.with(value)}</span>
                <span class="stat-tile__label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="stats-strip">
            {tile("Total", |s| s.total.to_string())}
            {tile("Published", |s| s.published.to_string())}
            {tile("Drafts", |s| s.drafts.to_string())}
            {tile("In Review", |s| s.in_review.to_string())}
            {tile("Views", |s| compact_count(s.total_views))}
            {tile("Likes", |s| compact_count(s.total_likes))}
        </div>
    }
}
