//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::net::api;
use crate::pages::{
    article::ArticlePage, category::CategoryPage, home::HomePage, login::LoginPage,
    writer_dashboard::WriterDashboardPage,
};
use crate::state::session::{RestoreStep, Session, SessionActions};
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session contexts and sets up client-side routing. The session
/// starts `Pending` and resolves once the stored token has been checked.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::pending());
    let actions = SessionActions::new(session);
    provide_context(actions);
    provide_context(actions.reader());

    // Resolve the stored token into a profile once, in the browser.
    Effect::new(move || {
        if storage::load_token().is_none() {
            actions.sign_out();
            return;
        }
        leptos::task::spawn_local(async move {
            let result = api::fetch_current_user().await;
            if let Err(err) = &result {
                leptos::logging::warn!("session restore failed: {err}");
            }
            match session.with_untracked(|s| s.restore_step(result)) {
                RestoreStep::Ignore => {}
                RestoreStep::Resolve(user) => actions.resolve(user),
                RestoreStep::SignOut { clear_token } => {
                    if clear_token {
                        storage::clear_token();
                    }
                    actions.sign_out();
                }
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/inkly.css"/>
        <Title text="Inkly"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("category"), ParamSegment("slug")) view=CategoryPage/>
                    <Route path=(StaticSegment("article"), ParamSegment("id")) view=ArticlePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("writer") view=WriterDashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
