//! Task List Component
//!
//! Renders the current page of tasks in server order.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::controller::{PageStateStoreFields, TodoController};

#[component]
pub fn TaskList() -> impl IntoView {
    let controller = use_context::<TodoController>().expect("TodoController should be provided");
    let state = controller.state;

    view! {
        <div class="task-list">
            <For
                each=move || state.tasks().get()
                key=|task| task.id.clone()
                children=move |task| view! { <TaskItem task=task /> }
            />
        </div>
    }
}
