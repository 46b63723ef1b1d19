//! New Task Form Component
//!
//! Modal form for creating a task: name, description, status.

use leptos::prelude::*;

use crate::context::UiContext;
use crate::controller::TodoController;
use crate::models::{NewTask, Status};

/// Submit is allowed only with a non-empty name and description and a
/// chosen status. The controller does not re-validate.
pub fn can_submit(name: &str, description: &str, status: Option<Status>) -> bool {
    !name.is_empty() && !description.is_empty() && status.is_some()
}

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");
    let controller = use_context::<TodoController>().expect("TodoController should be provided");

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal::<Option<Status>>(None);

    // Clear the fields whenever the modal closes.
    Effect::new(move |_| {
        if !ui.form_open.get() {
            set_name.set(String::new());
            set_description.set(String::new());
            set_status.set(None);
        }
    });

    view! {
        {move || ui.form_open.get().then(|| {
            let on_submit = move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                let name_value = name.get();
                let description_value = description.get();
                let status_value = status.get();
                if !can_submit(&name_value, &description_value, status_value) {
                    return;
                }
                let Some(status_value) = status_value else { return };
                let draft = NewTask::personal(name_value, description_value, status_value);
                // On failure the modal stays open with the fields intact.
                controller.create(draft, ui);
            };

            view! {
                <div class="modal-overlay" on:click=move |_| ui.close_form()>
                    <div class="modal form-container" on:click=|ev| ev.stop_propagation()>
                        <h3>"Add new Task"</h3>
                        <form on:submit=on_submit>
                            <input
                                type="text"
                                placeholder="Name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            <input
                                type="text"
                                placeholder="Description"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            />
                            <select
                                prop:value=move || {
                                    status.get().map(|s| s.as_wire()).unwrap_or("").to_string()
                                }
                                on:change=move |ev| {
                                    set_status.set(Status::from_wire(&event_target_value(&ev)))
                                }
                            >
                                <option value="">"Status"</option>
                                <option value="1">"Open"</option>
                                <option value="2">"In progress"</option>
                                <option value="3">"Completed"</option>
                            </select>
                            <button
                                type="submit"
                                disabled=move || {
                                    !can_submit(&name.get(), &description.get(), status.get())
                                }
                            >
                                "Add New Task"
                            </button>
                        </form>
                    </div>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_requires_all_fields() {
        assert!(can_submit("Buy milk", "2%", Some(Status::Open)));
        assert!(!can_submit("", "2%", Some(Status::Open)));
        assert!(!can_submit("Buy milk", "", Some(Status::Open)));
        assert!(!can_submit("Buy milk", "2%", None));
        assert!(!can_submit("", "", None));
    }
}
