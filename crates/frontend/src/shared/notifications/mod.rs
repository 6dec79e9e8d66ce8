//! In-app notifications: a persistent feed shown in the right panel, an
//! unread badge for the top header and transient toasts that dismiss
//! themselves after a few seconds.
//!
//! The feed is seeded with mock entries; everything else in the app pushes
//! through [`NotificationService::notify`].

use crate::shared::date_utils::time_ago;
use crate::shared::icons::icon;
use chrono::{Duration, Utc};
use contracts::domain::notification::{AppNotification, NotificationKind};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

const TOAST_DISMISS_MS: u32 = 4000;

/// Transient toast message.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

/// Context-provided handle to the notification state.
#[derive(Clone, Copy)]
pub struct NotificationService {
    pub feed: RwSignal<Vec<AppNotification>>,
    pub toasts: RwSignal<Vec<Toast>>,
}

fn seeded_feed() -> Vec<AppNotification> {
    let mut entries = vec![
        AppNotification::new(
            NotificationKind::Success,
            "Booking confirmed",
            "Tennis Court A is booked for Saturday 10:00-12:00",
        ),
        AppNotification::new(
            NotificationKind::Warning,
            "Maintenance scheduled",
            "Squash Box 2 closes for resurfacing on Thursday",
        ),
        AppNotification::new(
            NotificationKind::Info,
            "New member rates",
            "Off-peak hourly rates drop by 10% starting next month",
        ),
        AppNotification::new(
            NotificationKind::Error,
            "Payment declined",
            "Card payment for booking #4211 was declined",
        ),
    ];
    // Stagger the mock timestamps so the feed does not read "just now" four
    // times.
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.created_at = Utc::now() - Duration::minutes(12 * (i as i64 + 1));
    }
    if let Some(last) = entries.last_mut() {
        last.read = true;
    }
    entries
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            feed: RwSignal::new(seeded_feed()),
            toasts: RwSignal::new(Vec::new()),
        }
    }

    /// Add to the feed (unread, newest first) and show a toast.
    pub fn notify(&self, kind: NotificationKind, title: &str, body: &str) {
        self.feed
            .update(|feed| feed.insert(0, AppNotification::new(kind, title, body)));
        self.push_toast(kind, title, body);
    }

    /// Toast without a feed entry, for low-value confirmations.
    pub fn toast_only(&self, kind: NotificationKind, title: &str, body: &str) {
        self.push_toast(kind, title, body);
    }

    fn push_toast(&self, kind: NotificationKind, title: &str, body: &str) {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            title: title.to_string(),
            body: body.to_string(),
        };
        let id = toast.id;
        self.toasts.update(|toasts| toasts.push(toast));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    pub fn dismiss_toast(&self, id: Uuid) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    /// Reactive unread count for the bell badge.
    pub fn unread_count(&self) -> usize {
        self.feed.with(|feed| feed.iter().filter(|n| !n.read).count())
    }

    pub fn mark_read(&self, id: Uuid) {
        self.feed.update(|feed| {
            if let Some(entry) = feed.iter_mut().find(|n| n.id == id) {
                entry.read = true;
            }
        });
    }

    pub fn mark_all_read(&self) {
        self.feed.update(|feed| {
            for entry in feed.iter_mut() {
                entry.read = true;
            }
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

/// Fixed overlay rendering the toast stack.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-host">
            {move || service.toasts.get().into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div class=format!("toast {}", toast.kind.css_modifier())>
                        <span class="toast__icon">{icon(toast.kind.icon_name())}</span>
                        <div class="toast__content">
                            <div class="toast__title">{toast.title.clone()}</div>
                            <div class="toast__body">{toast.body.clone()}</div>
                        </div>
                        <button
                            class="toast__close"
                            on:click=move |_| service.dismiss_toast(id)
                            title="Dismiss"
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// Notification feed for the right panel.
#[component]
pub fn NotificationPanel() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notification-panel">
            <div class="notification-panel__header">
                <span class="notification-panel__title">"Notifications"</span>
                <button
                    class="notification-panel__mark-all"
                    on:click=move |_| service.mark_all_read()
                    disabled=move || service.unread_count() == 0
                >
                    {icon("check")}
                    "Mark all read"
                </button>
            </div>
            <div class="notification-panel__list">
                {move || {
                    let feed = service.feed.get();
                    if feed.is_empty() {
                        view! {
                            <div class="notification-panel__empty">"No notifications"</div>
                        }
                        .into_any()
                    } else {
                        let now = Utc::now();
                        feed.into_iter().map(|entry| {
                            let id = entry.id;
                            view! {
                                <div
                                    class=format!("notification {}", entry.kind.css_modifier())
                                    class:notification--unread=!entry.read
                                    on:click=move |_| service.mark_read(id)
                                >
                                    <span class="notification__icon">{icon(entry.kind.icon_name())}</span>
                                    <div class="notification__content">
                                        <div class="notification__title">{entry.title.clone()}</div>
                                        <div class="notification__body">{entry.body.clone()}</div>
                                        <div class="notification__time">{time_ago(entry.created_at, now)}</div>
                                    </div>
                                </div>
                            }
                        }).collect_view().into_any()
                    }
                }}
            </div>
        </div>
    }
}
