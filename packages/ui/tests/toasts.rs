//! Toast lifetime across page changes, driven through a headless VirtualDom.

use std::cell::Cell;
use std::time::Duration;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use ui::notify::TOAST_DURATION;
use ui::{notify_success, sleep, use_notifications, ToastProvider};

thread_local! {
    static VISIBLE: Cell<usize> = const { Cell::new(0) };
    static PEAK: Cell<usize> = const { Cell::new(0) };
}

/// Mirrors the toast queue length into the thread-locals on every render.
#[component]
fn ToastCount() -> Element {
    let toasts = use_notifications();
    let count = toasts.read().entries().len();
    VISIBLE.with(|v| v.set(count));
    PEAK.with(|p| p.set(p.get().max(count)));
    rsx! {}
}

/// A page that reports success as soon as it mounts.
#[component]
fn SavedPage() -> Element {
    let mut toasts = use_notifications();
    use_hook(move || notify_success(&mut toasts, "Job added successfully!"));
    rsx! { p { "saved" } }
}

/// `leave_after` unmounts the page, the way navigation does.
fn app(leave_after: Option<Duration>) -> Element {
    let mut show_page = use_signal(|| true);
    use_hook(move || {
        if let Some(delay) = leave_after {
            spawn(async move {
                sleep(delay).await;
                show_page.set(false);
            });
        }
    });

    rsx! {
        ToastProvider {
            ToastCount {}
            if show_page() {
                SavedPage {}
            }
        }
    }
}

async fn run_for(dom: &mut VirtualDom, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    loop {
        tokio::select! {
            _ = dom.wait_for_work() => {}
            _ = tokio::time::sleep_until(deadline) => break,
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

fn reset_counters() {
    VISIBLE.with(|v| v.set(0));
    PEAK.with(|p| p.set(0));
}

#[tokio::test(start_paused = true)]
async fn test_toast_dismisses_while_page_stays_mounted() {
    reset_counters();
    let mut dom = VirtualDom::new_with_props(app, None);
    dom.rebuild_in_place();

    run_for(&mut dom, TOAST_DURATION + Duration::from_secs(2)).await;

    assert_eq!(PEAK.with(|p| p.get()), 1);
    assert_eq!(VISIBLE.with(|v| v.get()), 0);
}

#[tokio::test(start_paused = true)]
async fn test_toast_dismisses_after_page_unmounts() {
    reset_counters();
    let mut dom = VirtualDom::new_with_props(app, Some(Duration::from_millis(200)));
    dom.rebuild_in_place();

    run_for(&mut dom, TOAST_DURATION + Duration::from_secs(2)).await;

    assert_eq!(PEAK.with(|p| p.get()), 1);
    assert_eq!(VISIBLE.with(|v| v.get()), 0);
}
