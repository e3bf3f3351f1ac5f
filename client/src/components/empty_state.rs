//! Placeholder for a successful fetch that returned nothing to show.

use leptos::prelude::*;

#[component]
pub fn EmptyState(title: &'static str, #[prop(into)] message: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2 class="empty-state__title">{title}</h2>
            <p class="empty-state__message">{message}</p>
            {children.map(|children| children())}
        </div>
    }
}
