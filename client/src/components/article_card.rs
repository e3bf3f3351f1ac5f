//! Reusable card component for article list items.
//!
//! DESIGN
//! ======
//! Keeps article list presentation consistent between the category listing
//! and the writer dashboard. Only display formatting happens here.

use leptos::prelude::*;
use records::Article;

use crate::components::status_badge::StatusBadge;
use crate::util::format::{compact_count, format_date, reading_time_label};

/// A clickable card summarizing one article.
#[component]
pub fn ArticleCard(
    article: Article,
    /// Show the status pill and last-updated date (writer dashboard).
    #[prop(optional)]
    manage: bool,
) -> impl IntoView {
    let href = format!("/article/{}", article.id);
    let reading = reading_time_label(article.reading_time, article.content.as_deref().unwrap_or(&article.excerpt));
    let date = if manage {
        format!("Updated {}", format_date(article.updated_at.or(article.created_at)))
    } else {
        format_date(article.published_at.or(article.created_at))
    };
    let status = article.status;
    let author = article.author.clone();
    let tags = article.tags;

    view! {
        <article class="article-card" class:article-card--manage=manage>
            <header class="article-card__header">
                <a class="article-card__title" href=href>{article.title}</a>
                <Show when=move || manage>
                    <StatusBadge status=status/>
                </Show>
            </header>
            <p class="article-card__excerpt">{article.excerpt}</p>
            <footer class="article-card__meta">
                {author.map(|name| view! { <span class="article-card__author">{name}</span> })}
                <span class="article-card__date">{date}</span>
                <span class="article-card__reading">{reading}</span>
                <span class="article-card__stat" title="Views">{format!("{} views", compact_count(article.views))}</span>
                <span class="article-card__stat" title="Likes">{format!("{} likes", compact_count(article.likes))}</span>
                <span class="article-card__stat" title="Comments">
                    {format!("{} comments", compact_count(article.comments))}
                </span>
            </footer>
            {(!tags.is_empty())
                .then(|| {
                    view! {
                        <ul class="article-card__tags">
                            {tags
                                .into_iter()
                                .map(|tag| view! { <li class="tag">{format!("#{tag}")}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                })}
        </article>
    }
}
