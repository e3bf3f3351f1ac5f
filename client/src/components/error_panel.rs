//! Fetch-failure panel with a retry control.

use leptos::prelude::*;

/// Show `message` with a "Try Again" button that re-runs the failed fetch.
#[component]
pub fn ErrorPanel(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <h2 class="error-panel__title">"Something went wrong"</h2>
            <p class="error-panel__message">{message}</p>
            <button class="btn btn--primary error-panel__retry" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </div>
    }
}
