//! Status Badge Component

use leptos::prelude::*;

use crate::models::Status;

/// Colored badge showing a task's lifecycle stage.
#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    view! {
        <span class="todo-badge" style=format!("background: {};", status.badge_bg())>
            {status.label()}
        </span>
    }
}
