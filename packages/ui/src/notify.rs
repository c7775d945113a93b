use std::time::Duration;

use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;

use crate::timer::sleep;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);
/// Older toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// The queue of visible toasts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    entries: Vec<Toast>,
    next_id: u64,
}

impl Notifications {
    /// Queue a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message: message.to_string(),
        });
        if self.entries.len() > MAX_TOASTS {
            let excess = self.entries.len() - MAX_TOASTS;
            self.entries.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Show a toast and schedule its dismissal.
///
/// The dismissal timer runs in the root scope, so it survives the calling
/// page unmounting (pages usually navigate right after a success toast).
pub fn notify(toasts: &mut Signal<Notifications>, level: ToastLevel, message: &str) {
    match level {
        ToastLevel::Error => tracing::warn!("{}", message),
        _ => tracing::info!("{}", message),
    }
    let id = toasts.write().push(level, message);

    let mut toasts = *toasts;
    spawn_forever(async move {
        sleep(TOAST_DURATION).await;
        toasts.write().dismiss(id);
    });
}

pub fn notify_success(toasts: &mut Signal<Notifications>, message: &str) {
    notify(toasts, ToastLevel::Success, message);
}

pub fn notify_error(toasts: &mut Signal<Notifications>, message: &str) {
    notify(toasts, ToastLevel::Error, message);
}

/// Provides the notification queue and renders it above the app.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut toasts = use_context_provider(|| Signal::new(Notifications::default()));
    let entries: Vec<(u64, &'static str, &'static str, String)> = toasts()
        .entries()
        .iter()
        .map(|t| {
            let (class, icon) = match t.level {
                ToastLevel::Success => ("toast success", "\u{1F389}"),
                ToastLevel::Error => ("toast error", "\u{274C}"),
                ToastLevel::Info => ("toast info", "\u{2139}"),
            };
            (t.id, class, icon, t.message.clone())
        })
        .collect();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        {children}

        div {
            class: "toast-stack",
            role: "status",
            for (id, class, icon, message) in entries {
                div {
                    key: "{id}",
                    class: "{class}",
                    onclick: move |_| toasts.write().dismiss(id),
                    span { class: "toast-icon", "{icon}" }
                    span { "{message}" }
                }
            }
        }
    }
}
