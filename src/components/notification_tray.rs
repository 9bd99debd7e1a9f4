//! Toast stack rendering the shared notification queue.

use leptos::prelude::*;

use crate::config::AppConfig;
#[cfg(feature = "hydrate")]
use crate::state::notifications::ExpirySchedule;
use crate::state::notifications::{NotificationKind, NotificationState};

/// Fixed-position toast list. In the browser each toast expires after the
/// configured TTL; it can always be dismissed by hand.
#[component]
pub fn NotificationTray() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let config = expect_context::<AppConfig>();

    #[cfg(feature = "hydrate")]
    {
        let ttl = std::time::Duration::from_millis(config.notification_ttl_ms);
        let schedule = StoredValue::new(ExpirySchedule::default());
        Effect::new(move || {
            let fresh = notifications
                .with(|n| schedule.try_update_value(|s| s.schedule_new(&n.items)))
                .unwrap_or_default();
            for id in fresh {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(ttl).await;
                    let _ = schedule.try_update_value(|s| s.fired(id));
                    notifications.update(|n| n.dismiss(id));
                });
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    view! {
        <div class="notification-tray" aria-live="polite">
            {move || {
                notifications
                    .get()
                    .items
                    .into_iter()
                    .map(|item| {
                        let id = item.id;
                        let is_error = item.kind == NotificationKind::Error;
                        let is_success = item.kind == NotificationKind::Success;
                        view! {
                            <div
                                class="notification-tray__toast"
                                class:notification-tray__toast--error=is_error
                                class:notification-tray__toast--success=is_success
                            >
                                <span class="notification-tray__message">{item.message}</span>
                                <button
                                    class="notification-tray__dismiss"
                                    title="Dismiss"
                                    on:click=move |_| notifications.update(|n| n.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
