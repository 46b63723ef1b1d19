//! Pagination Bar Component
//!
//! Page buttons derived from the total count, plus a page-size select.
//! Only pages in `1..=page_count` are ever offered.

use leptos::prelude::*;

use crate::controller::{page_count, PageStateStoreFields, TodoController};

/// Page sizes offered by the select.
pub const LIMIT_OPTIONS: &[u32] = &[5, 10, 20];

#[component]
pub fn PaginationBar() -> impl IntoView {
    let controller = use_context::<TodoController>().expect("TodoController should be provided");
    let state = controller.state;

    let pages = move || {
        let count = page_count(state.total_todos().get(), state.limit().get());
        (1..=count).collect::<Vec<u32>>()
    };

    view! {
        <div class="pagination">
            <For
                each=pages
                key=|page| *page
                children=move |page| {
                    let is_active = move || state.page().get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "page-btn active" } else { "page-btn" }
                            on:click=move |_| controller.set_page(page)
                        >
                            {page}
                        </button>
                    }
                }
            />
            <select
                class="limit-select"
                on:change=move |ev| {
                    if let Ok(limit) = event_target_value(&ev).parse::<u32>() {
                        controller.set_limit(limit);
                    }
                }
            >
                {LIMIT_OPTIONS.iter().map(|limit| {
                    let limit = *limit;
                    view! {
                        <option
                            value=limit.to_string()
                            selected=move || state.limit().get() == limit
                        >
                            {format!("{limit} / page")}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
