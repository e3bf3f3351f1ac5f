//! Article status pill.

use leptos::prelude::*;
use records::ArticleStatus;

/// Unknown statuses render with the neutral style.
#[component]
pub fn StatusBadge(status: ArticleStatus) -> impl IntoView {
    let class = format!("status-badge {}", status.css_modifier());
    view! { <span class=class>{status.label()}</span> }
}
