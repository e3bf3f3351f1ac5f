//! Access-denied screen for signed-in users without the required role.
//!
//! Denial is a designed state, not an error: it offers navigation away
//! rather than a retry.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::guard::DeniedAttempt;

#[component]
pub fn AccessDenied(denied: DeniedAttempt) -> impl IntoView {
    let navigate = StoredValue::new(use_navigate());
    let area = denied.area.label();
    let current_role = denied.current_role_label();
    let required_role = denied.required_label();

    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                let _ = history.back();
            }
        }
    };
    let on_home = move |_| navigate.with_value(|nav| nav("/", NavigateOptions::default()));

    view! {
        <section class="access-denied" role="alert">
            <h1 class="access-denied__title">"Access Denied"</h1>
            <p class="access-denied__message">
                "You don't have permission to open the " {area} "."
            </p>
            <dl class="access-denied__roles">
                <dt>"Your role"</dt>
                <dd class="access-denied__role">{current_role}</dd>
                <dt>"Required role"</dt>
                <dd class="access-denied__role">{required_role}</dd>
            </dl>
            <div class="access-denied__actions">
                <button class="btn" on:click=on_back>"Go Back"</button>
                <button class="btn btn--primary" on:click=on_home>"Go Home"</button>
            </div>
        </section>
    }
}
