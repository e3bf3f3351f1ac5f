//! Top navigation bar with identity and sign-in/out controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::Role;

use crate::state::session::{Session, SessionActions};
use crate::util::storage;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<ReadSignal<Session>>();
    let actions = expect_context::<SessionActions>();
    let navigate = StoredValue::new(use_navigate());

    let identity = move || {
        session.with(|s| {
            s.user()
                .map(|user| format!("{} ({})", user.display_name(), user.role))
                .unwrap_or_default()
        })
    };
    let is_writer = move || session.with(|s| s.role() == Some(Role::Writer));

    let on_logout = move |_| {
        storage::clear_token();
        actions.sign_out();
        navigate.with_value(|nav| nav("/", NavigateOptions::default()));
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Inkly"</a>
            <nav class="site-header__nav">
                <a href="/">"Categories"</a>
                <Show when=is_writer>
                    <a href="/writer">"Dashboard"</a>
                </Show>
            </nav>
            <span class="site-header__spacer"></span>
            <Show
                when=move || session.with(Session::is_authenticated)
                fallback=move || {
                    view! {
                        <Show when=move || !session.with(Session::loading)>
                            <a class="btn site-header__login" href="/login">"Sign In"</a>
                        </Show>
                    }
                }
            >
                <span class="site-header__identity">{identity}</span>
                <button class="btn site-header__logout" on:click=on_logout>"Sign Out"</button>
            </Show>
        </header>
    }
}
