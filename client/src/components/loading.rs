//! Non-interactive loading placeholder.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(#[prop(default = "Loading...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-busy="true">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="loading__label">{label}</span>
        </div>
    }
}
