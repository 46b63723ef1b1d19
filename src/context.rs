//! UI Context
//!
//! The two independent view flags, provided via Leptos context: creation
//! form open/closed and confirmation alert visible/hidden.

use leptos::prelude::*;

/// A transient confirmation message.
///
/// The id is monotonic so a delayed auto-dismiss for an old alert can
/// never clear a newer one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
}

/// App-wide UI signals provided via context
#[derive(Clone, Copy)]
pub struct UiContext {
    /// Creation form visibility - read
    pub form_open: ReadSignal<bool>,
    /// Creation form visibility - write
    set_form_open: WriteSignal<bool>,
    /// Current confirmation alert, if any - read
    pub alert: ReadSignal<Option<Alert>>,
    /// Current confirmation alert - write
    set_alert: WriteSignal<Option<Alert>>,
    next_alert_id: StoredValue<u64>,
}

impl UiContext {
    pub fn new(
        form_open: (ReadSignal<bool>, WriteSignal<bool>),
        alert: (ReadSignal<Option<Alert>>, WriteSignal<Option<Alert>>),
    ) -> Self {
        Self {
            form_open: form_open.0,
            set_form_open: form_open.1,
            alert: alert.0,
            set_alert: alert.1,
            next_alert_id: StoredValue::new(0),
        }
    }

    pub fn open_form(&self) {
        self.set_form_open.set(true);
    }

    pub fn close_form(&self) {
        self.set_form_open.set(false);
    }

    /// Show a confirmation message, replacing any current one.
    pub fn show_alert(&self, message: String) {
        let id = self.next_alert_id.with_value(|id| *id);
        self.next_alert_id.update_value(|id| *id += 1);
        self.set_alert.set(Some(Alert { id, message }));
    }

    /// Dismiss the alert, but only if it is still the one with this id.
    pub fn dismiss_alert(&self, id: u64) {
        self.set_alert.update(|slot| {
            if slot.as_ref().is_some_and(|alert| alert.id == id) {
                *slot = None;
            }
        });
    }
}
