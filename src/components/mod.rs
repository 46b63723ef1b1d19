//! UI Components
//!
//! Leptos components for the to-do list view.

mod new_task_form;
mod pagination;
mod snackbar;
mod status_badge;
mod task_item;
mod task_list;

pub use new_task_form::NewTaskForm;
pub use pagination::PaginationBar;
pub use snackbar::Snackbar;
pub use status_badge::StatusBadge;
pub use task_item::TaskItem;
pub use task_list::TaskList;
