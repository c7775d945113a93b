//! This crate contains all shared UI for the workspace.
//!
//! | Module | Provides |
//! |--------|----------|
//! | `session` | [`SessionProvider`], [`use_session`], [`use_api`] |
//! | `notify` | [`ToastProvider`] and the `notify_*` helpers |
//! | `guard` | route access rules ([`Access`], [`check`]) |
//! | `nav` | role-gated navigation entries |
//! | `job_card`, `status` | presentational components |

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::make_session_backend;

mod session;
pub use session::{use_api, use_session, SessionHandle, SessionProvider};

mod timer;
pub use timer::sleep;

pub mod notify;
pub use notify::{
    notify, notify_error, notify_success, use_notifications, Notifications, ToastLevel,
    ToastProvider,
};

pub mod guard;
pub use guard::{check, Access, Redirect};

pub mod nav;
pub use nav::{greeting, nav_items, NavItem};

mod job_card;
pub use job_card::JobCard;

mod status;
pub use status::{EmptyState, ErrorMessage, Spinner};
