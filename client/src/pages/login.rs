//! Login page: email + password sign-in that returns to the guarded route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard sends anonymous visitors here with `?from=<path>`. A
//! successful sign-in stores the bearer token, resolves the session, and
//! replaces this history entry with that path.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use records::FetchError;

use crate::net::api;
use crate::state::session::{Session, SessionActions};
use crate::util::guard::return_target;
use crate::util::storage;

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub(crate) fn login_failed_message(err: &FetchError) -> String {
    if err.is_unauthorized() {
        return "Invalid email or password.".to_owned();
    }
    format!("Sign-in failed: {err}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<ReadSignal<Session>>();
    let actions = expect_context::<SessionActions>();
    let navigate = StoredValue::new(use_navigate());
    let query = use_query_map();
    let target = Memo::new(move |_| query.with(|q| return_target(q.get("from").as_deref())));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let go_to_target = move || {
        let to = target.get_untracked();
        navigate.with_value(|nav| {
            nav(
                &to,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        });
    };

    // Already signed in: skip the form.
    Effect::new(move || {
        if session.with(Session::is_authenticated) && !busy.get_untracked() {
            go_to_target();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        leptos::task::spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(grant) => {
                    storage::save_token(&grant.token);
                    let user = match grant.user {
                        Some(user) => Some(user),
                        None => api::fetch_current_user().await.ok().flatten(),
                    };
                    actions.resolve(user);
                    password.set(String::new());
                    go_to_target();
                }
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    info.set(login_failed_message(&err));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in to Inkly"</h1>
                <p class="login-card__subtitle">"Writers sign in to manage their articles."</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
