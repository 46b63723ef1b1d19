//! To-Do Front-End App
//!
//! Root component: owns the controller and UI context, binds the list
//! fetch to page/limit changes.

use leptos::prelude::*;

use crate::components::{NewTaskForm, PaginationBar, Snackbar, TaskList};
use crate::context::{Alert, UiContext};
use crate::controller::{PageStateStoreFields, TodoController};

#[component]
pub fn App() -> impl IntoView {
    let controller = TodoController::new();
    let state = controller.state;

    let (form_open, set_form_open) = signal(false);
    let (alert, set_alert) = signal::<Option<Alert>>(None);
    let ui = UiContext::new((form_open, set_form_open), (alert, set_alert));

    provide_context(controller);
    provide_context(ui);

    // Fetch on mount and whenever page or limit changes. A response that
    // arrives after a newer request was issued is discarded.
    Effect::new(move |_| {
        let page = state.page().get();
        let limit = state.limit().get();
        controller.fetch(page, limit);
    });

    view! {
        <Snackbar />
        <div class="todo-app">
            <header class="title">
                <h2>"TODO"</h2>
                <div class="todo-count">{move || state.total_todos().get()}</div>
            </header>
            <div class="todo-list-container">
                <div class="add-todo">
                    <button class="add-task-btn" on:click=move |_| ui.open_form()>
                        "+ Add New Task"
                    </button>
                </div>
                <TaskList />
            </div>
            <PaginationBar />
            <NewTaskForm />
        </div>
    }
}
