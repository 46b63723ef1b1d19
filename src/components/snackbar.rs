//! Snackbar Component
//!
//! Transient confirmation message shown after a successful create.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::UiContext;

/// How long a confirmation stays on screen.
pub const ALERT_DISMISS_MS: u32 = 4_000;

#[component]
pub fn Snackbar() -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");

    // Schedule an auto-dismiss for each alert as it appears. The alert
    // id keeps a stale timer from clearing a newer message.
    Effect::new(move |_| {
        if let Some(alert) = ui.alert.get() {
            let id = alert.id;
            spawn_local(async move {
                TimeoutFuture::new(ALERT_DISMISS_MS).await;
                ui.dismiss_alert(id);
            });
        }
    });

    view! {
        {move || ui.alert.get().map(|alert| view! {
            <div class="snackbar">{alert.message}</div>
        })}
    }
}
