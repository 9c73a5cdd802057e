use leptos::{
    component, create_signal, expect_context, provide_context, set_timeout, view, For, IntoView,
    ReadSignal, SignalUpdate, SignalWith, WriteSignal,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::queue::{
    ActiveNotification, NotificationQueue, NOTIFICATION_LIFETIME, SLIDE_OUT_DURATION,
    WELCOME_DELAY,
};
use super::types::NotificationEvent;

/// Handle used anywhere in the tree to raise a banner.
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: ReadSignal<NotificationQueue>,
    set_queue: WriteSignal<NotificationQueue>,
}

impl Notifier {
    pub fn notify(self, event: NotificationEvent) {
        info!(title = %event.title, severity = ?event.severity, "notification");

        let mut id = Uuid::nil();
        self.set_queue.update(|queue| id = queue.push(event));

        set_timeout(move || self.dismiss(id), NOTIFICATION_LIFETIME);
    }

    pub fn dismiss(self, id: Uuid) {
        let mut dismissed = false;
        self.set_queue
            .update(|queue| dismissed = queue.begin_dismiss(id));

        if dismissed {
            debug!(%id, "dismissing notification");
            set_timeout(
                move || self.set_queue.update(|queue| queue.remove(id)),
                SLIDE_OUT_DURATION,
            );
        }
    }
}

pub fn provide_notifier() -> Notifier {
    let (queue, set_queue) = create_signal(NotificationQueue::default());
    let notifier = Notifier { queue, set_queue };
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

pub fn show_welcome(notifier: Notifier) {
    set_timeout(
        move || {
            notifier.notify(NotificationEvent::success(
                "Welcome to B-SMART",
                "The monitoring system is active and running normally.",
            ));
        },
        WELCOME_DELAY,
    );
}

#[component]
pub fn NotificationContainer() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div id="notification-container">
            <For
                each=move || notifier.queue.with(|queue| queue.entries().to_vec())
                key=|entry| (entry.id, entry.leaving)
                let:entry
            >
                <NotificationBanner entry notifier></NotificationBanner>
            </For>
        </div>
    }
}

#[component]
fn NotificationBanner(entry: ActiveNotification, notifier: Notifier) -> impl IntoView {
    let ActiveNotification { id, event, leaving } = entry;
    let severity = event.severity;

    view! {
        <div
            class=format!("notification {}", severity.class_name())
            style:animation=leaving.then_some("slideOut 0.3s ease")
        >
            <div class="notification-header">
                <i class=format!("fas {}", severity.icon())></i>
                <span>{event.title}</span>
                <button class="notification-close" on:click=move |_| notifier.dismiss(id)>
                    "×"
                </button>
            </div>
            <div class="notification-body">{event.message}</div>
        </div>
    }
}
