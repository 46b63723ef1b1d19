//! Task Item Component
//!
//! A single collapsible row: name in the summary, description and
//! status badge in the expandable details.

use leptos::prelude::*;

use crate::components::StatusBadge;
use crate::models::Task;

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    let name = task.name.clone();
    let description = task.description.clone();
    let status = task.status;

    view! {
        <div class="task-item">
            <button
                class="task-summary"
                on:click=move |_| set_expanded.update(|open| *open = !*open)
            >
                <span class="task-name">{name}</span>
                <span class="expand-icon">{move || if expanded.get() { "▲" } else { "▼" }}</span>
            </button>
            {move || expanded.get().then(|| {
                let description = description.clone();
                view! {
                    <div class="task-details">
                        <div class="task-description">{description}</div>
                        <StatusBadge status=status />
                    </div>
                }
            })}
        </div>
    }
}
