//! To-Do List Controller
//!
//! Owns the paging state and the two service operations (list, create).
//! The view reads the state through a `reactive_stores` store and
//! mutates it only through the controller's methods.

use std::cell::Cell;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::TodoApi;
use crate::context::UiContext;
use crate::models::{NewTask, Task};

/// Default page size.
pub const DEFAULT_LIMIT: u32 = 5;

/// Current page of the to-do list.
///
/// `page` is 1-based and always within `[1, page_count(total_todos, limit)]`;
/// the pagination control never offers anything else and `set_limit`
/// resets to page 1.
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    pub tasks: Vec<Task>,
    pub total_todos: u32,
    pub page: u32,
    pub limit: u32,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            ..Default::default()
        }
    }
}

/// Number of pages for a given total; never less than 1.
pub fn page_count(total_todos: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    total_todos.div_ceil(limit).max(1)
}

/// 0-based index sent to the server for a 1-based page number.
pub fn page_index(page: u32) -> u32 {
    page.saturating_sub(1)
}

/// Monotonic ticket counter for in-flight list requests.
///
/// A response is applied only while its ticket is still the newest, so
/// a slow fetch for page N can never overwrite the result of a later
/// fetch for page N+1.
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: Cell<u64>,
}

impl RequestSeq {
    pub fn begin(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

/// UI follow-up after a create attempt resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFollowUp {
    /// Close the creation form (success only; on failure it stays open).
    pub close_form: bool,
    /// Confirmation message to surface, straight from the server.
    pub alert: Option<String>,
    /// Page reloads to issue: exactly one on success, zero on failure.
    pub reloads: u32,
    /// Error to record on the diagnostic channel.
    pub error: Option<String>,
}

/// Decide what the UI does once a create attempt has resolved.
pub fn create_follow_up<E: std::fmt::Display>(result: &Result<String, E>) -> CreateFollowUp {
    match result {
        Ok(message) => CreateFollowUp {
            close_form: true,
            alert: Some(message.clone()),
            reloads: 1,
            error: None,
        },
        Err(err) => CreateFollowUp {
            close_form: false,
            alert: None,
            reloads: 0,
            error: Some(err.to_string()),
        },
    }
}

/// Controller for the to-do list view.
///
/// The API client lives in thread-local storage (it is not `Send` on
/// wasm), so the controller handle itself stays `Copy` and can move
/// freely into view closures.
#[derive(Clone, Copy)]
pub struct TodoController {
    pub state: Store<PageState>,
    api: StoredValue<TodoApi, LocalStorage>,
    seq: StoredValue<RequestSeq, LocalStorage>,
}

impl TodoController {
    pub fn new() -> Self {
        Self::with_api(TodoApi::new())
    }

    pub fn with_api(api: TodoApi) -> Self {
        Self {
            state: Store::new(PageState::new()),
            api: StoredValue::new_local(api),
            seq: StoredValue::new_local(RequestSeq::default()),
        }
    }

    /// Fetch one page and replace `tasks`/`total_todos` with the result.
    ///
    /// Fail-soft: on any error the state is left untouched and the error
    /// goes to the console only. Stale responses are discarded.
    pub fn fetch(&self, page: u32, limit: u32) {
        let ticket = self.seq.with_value(|seq| seq.begin());
        let api = self.api.get_value();
        let seq = self.seq;
        let state = self.state;
        spawn_local(async move {
            match api.list(page_index(page), limit).await {
                Ok(fetched) => {
                    if !seq.with_value(|seq| seq.is_current(ticket)) {
                        return;
                    }
                    state.tasks().set(fetched.tasks);
                    state.total_todos().set(fetched.total_todos);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("todo list fetch failed: {err}").into());
                }
            }
        });
    }

    /// Re-fetch the current page (after a successful create).
    pub fn refresh(&self) {
        let page = self.state.page().get_untracked();
        let limit = self.state.limit().get_untracked();
        self.fetch(page, limit);
    }

    pub fn set_page(&self, page: u32) {
        self.state.page().set(page.max(1));
    }

    /// Change the page size and jump back to page 1 so the current page
    /// cannot end up past the new page count.
    pub fn set_limit(&self, limit: u32) {
        self.state.limit().set(limit.max(1));
        self.state.page().set(1);
    }

    /// Submit a new task.
    ///
    /// On success: close the form, show the server's confirmation
    /// message, and reload the current page exactly once. On failure the
    /// form stays open and nothing is refetched.
    pub fn create(&self, draft: NewTask, ui: UiContext) {
        let api = self.api.get_value();
        let this = *self;
        spawn_local(async move {
            let follow_up = create_follow_up(&api.create(&draft).await);
            if let Some(error) = follow_up.error {
                web_sys::console::error_1(&format!("todo create failed: {error}").into());
            }
            if follow_up.close_form {
                ui.close_form();
            }
            if let Some(message) = follow_up.alert {
                ui.show_alert(message);
            }
            for _ in 0..follow_up.reloads {
                this.refresh();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(12, 5), 3);
        assert_eq!(page_count(10, 5), 2);
        assert_eq!(page_count(11, 5), 3);
        assert_eq!(page_count(1, 5), 1);
    }

    #[test]
    fn page_count_is_at_least_one() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(0, 1), 1);
        assert_eq!(page_count(7, 0), 1);
    }

    #[test]
    fn page_index_is_zero_based() {
        // Page 3 of the 12-task / limit-5 scenario fetches pageNumber=2.
        assert_eq!(page_index(3), 2);
        assert_eq!(page_index(1), 0);
        assert_eq!(page_index(0), 0);
    }

    #[test]
    fn request_seq_discards_stale_tickets() {
        let seq = RequestSeq::default();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn request_seq_is_current_until_superseded() {
        let seq = RequestSeq::default();
        let ticket = seq.begin();
        assert!(seq.is_current(ticket));
        seq.begin();
        assert!(!seq.is_current(ticket));
    }

    #[test]
    fn successful_create_closes_form_and_reloads_once() {
        let follow_up = create_follow_up::<&str>(&Ok("todo created".into()));
        assert!(follow_up.close_form);
        assert_eq!(follow_up.alert.as_deref(), Some("todo created"));
        assert_eq!(follow_up.reloads, 1);
        assert!(follow_up.error.is_none());
    }

    #[test]
    fn failed_create_keeps_form_open_without_refetch() {
        let follow_up = create_follow_up(&Err::<String, _>("connection reset"));
        assert!(!follow_up.close_form);
        assert!(follow_up.alert.is_none());
        assert_eq!(follow_up.reloads, 0);
        assert_eq!(follow_up.error.as_deref(), Some("connection reset"));
    }

    #[test]
    fn default_page_state_starts_on_first_page() {
        let state = PageState::new();
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, DEFAULT_LIMIT);
        assert!(state.tasks.is_empty());
        assert_eq!(state.total_todos, 0);
    }
}
