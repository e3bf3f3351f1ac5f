//! Category tile for the home page grid.

use leptos::prelude::*;
use records::Category;

const DEFAULT_ACCENT: &str = "#6b7280";

#[component]
pub fn CategoryCard(category: Category) -> impl IntoView {
    let href = format!("/category/{}", category.slug);
    let accent = format!("--category-accent: {}", category.color.as_deref().unwrap_or(DEFAULT_ACCENT));
    let count = category.article_count.map(|n| match n {
        1 => "1 article".to_owned(),
        n => format!("{n} articles"),
    });

    view! {
        <a class="category-card" href=href style=accent>
            <span class="category-card__name">{category.name}</span>
            {category.description.map(|d| view! { <span class="category-card__description">{d}</span> })}
            {count.map(|c| view! { <span class="category-card__count">{c}</span> })}
        </a>
    }
}
