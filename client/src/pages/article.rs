//! Article detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use records::Article;

use crate::components::error_panel::ErrorPanel;
use crate::components::loading::LoadingIndicator;
use crate::net::api;
use crate::state::fetch::{FetchState, spawn_fetch};
use crate::util::format::{compact_count, format_date, reading_time_label};
use crate::util::markdown::render_article_html;

#[component]
pub fn ArticlePage() -> impl IntoView {
    let params = use_params_map();
    let article_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let article = RwSignal::new(FetchState::<Article>::loading());

    let load = move |id: String| spawn_fetch(article, async move { api::fetch_article(&id).await });
    Effect::new(move || load(article_id.get()));
    let on_retry = Callback::new(move |()| load(article_id.get_untracked()));

    view! {
        <section class="article-page">
            {move || {
                let state = article.get();
                if state.loading {
                    return view! { <LoadingIndicator label="Loading article..."/> }.into_any();
                }
                if let Some(message) = state.error {
                    return view! { <ErrorPanel message=message on_retry=on_retry/> }.into_any();
                }
                match state.data {
                    Some(article) => view! { <ArticleBody article=article/> }.into_any(),
                    None => view! { <LoadingIndicator label="Loading article..."/> }.into_any(),
                }
            }}
        </section>
    }
}

#[component]
fn ArticleBody(article: Article) -> impl IntoView {
    let body = article.content.clone().unwrap_or_else(|| article.excerpt.clone());
    let reading = reading_time_label(article.reading_time, &body);
    let rendered = render_article_html(&body);
    let published = format_date(article.published_at.or(article.created_at));

    view! {
        <article class="article-detail">
            <header class="article-detail__header">
                <h1 class="article-detail__title">{article.title}</h1>
                <p class="article-detail__meta">
                    {article.author.map(|name| view! { <span class="article-detail__author">{name}</span> })}
                    <span>{published}</span>
                    <span>{reading}</span>
                    <span>{format!("{} views", compact_count(article.views))}</span>
                </p>
            </header>
            <div class="article-detail__body" inner_html=rendered></div>
            <footer class="article-detail__footer">
                <span>{format!("{} likes", compact_count(article.likes))}</span>
                <span>{format!("{} comments", compact_count(article.comments))}</span>
                <ul class="article-detail__tags">
                    {article.tags.into_iter().map(|tag| view! { <li class="tag">{format!("#{tag}")}</li> }).collect::<Vec<_>>()}
                </ul>
            </footer>
        </article>
    }
}
