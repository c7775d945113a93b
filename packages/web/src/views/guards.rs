//! Guard layouts. Each one checks the session before its child routes
//! mount; a refused visitor gets an empty outlet and a location replace, so
//! the protected page and its fetch never start.

use dioxus::prelude::*;
use ui::{check, use_session, Access, Redirect};

use crate::Route;

fn guarded_outlet(access: Access) -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        if let Err(redirect) = check(access, session.current().as_ref()) {
            let target = match redirect {
                Redirect::Home => Route::Landing {},
                Redirect::Login => Route::Login {},
            };
            tracing::debug!("{:?} route refused, redirecting to {}", access, target);
            nav.replace(target);
        }
    });

    match check(access, session.current().as_ref()) {
        Ok(()) => rsx! { Outlet::<Route> {} },
        Err(_) => rsx! {},
    }
}

#[component]
pub fn GuestOnly() -> Element {
    guarded_outlet(Access::Guest)
}

#[component]
pub fn ApplicantOnly() -> Element {
    guarded_outlet(Access::Applicant)
}

#[component]
pub fn EmployerOnly() -> Element {
    guarded_outlet(Access::Employer)
}
