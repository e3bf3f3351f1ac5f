//! Home page listing every category.

use leptos::prelude::*;
use records::Category;

use crate::components::category_card::CategoryCard;
use crate::components::empty_state::EmptyState;
use crate::components::error_panel::ErrorPanel;
use crate::components::loading::LoadingIndicator;
use crate::net::api;
use crate::state::fetch::{FetchState, spawn_fetch};

#[component]
pub fn HomePage() -> impl IntoView {
    let categories = RwSignal::new(FetchState::<Vec<Category>>::loading());

    let load = move || spawn_fetch(categories, api::fetch_categories());
    Effect::new(move || load());
    let on_retry = Callback::new(move |()| load());

    view! {
        <section class="home-page">
            <header class="page-header">
                <h1>"Explore Categories"</h1>
                <p class="page-header__subtitle">"Find stories by topic."</p>
            </header>
            {move || {
                let state = categories.get();
                if state.loading {
                    return view! { <LoadingIndicator label="Loading categories..."/> }.into_any();
                }
                if let Some(message) = state.error {
                    return view! { <ErrorPanel message=message on_retry=on_retry/> }.into_any();
                }
                let items = state.data.unwrap_or_default();
                if items.is_empty() {
                    return view! {
                        <EmptyState title="No categories yet" message="Check back soon for new topics."/>
                    }
                        .into_any();
                }
                view! {
                    <div class="category-grid">
                        {items
                            .into_iter()
                            .map(|category| view! { <CategoryCard category=category/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
