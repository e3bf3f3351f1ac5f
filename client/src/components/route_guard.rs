//! Role-gated wrapper for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Samples the session once per render, asks `util::guard::decide` for an
//! outcome, and renders exactly one of: loading placeholder, login redirect,
//! access-denied view, or the wrapped children.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::access_denied::AccessDenied;
use crate::components::loading::LoadingIndicator;
use crate::state::session::Session;
use crate::util::guard::{GuardDecision, ProtectedArea, decide, location_path};

/// Render `children` only for sessions whose role is allowed into `area`.
#[component]
pub fn RouteGuard(area: ProtectedArea, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<ReadSignal<Session>>();
    let location = use_location();

    let decision = Memo::new(move |_| {
        let from = location_path(&location.pathname.get(), &location.search.get());
        session.with(|s| decide(s, area, &from))
    });

    // One audit line per transition into the denied state.
    Effect::new(move || {
        if let GuardDecision::Forbidden(denied) = decision.get() {
            leptos::logging::warn!("{}", denied.audit_line());
        }
    });

    move || match decision.get() {
        GuardDecision::Pending => view! { <LoadingIndicator label="Checking your session..."/> }.into_any(),
        GuardDecision::Redirect { to } => view! { <Redirect path=to/> }.into_any(),
        GuardDecision::Forbidden(denied) => view! { <AccessDenied denied=denied/> }.into_any(),
        GuardDecision::Authorized => children().into_any(),
    }
}
