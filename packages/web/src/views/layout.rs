//! Site chrome shared by every route: header with role-gated navigation,
//! the routed page, and the footer.

use dioxus::prelude::*;
use ui::icons::{FaBars, FaBriefcase, FaXmark};
use ui::{greeting, nav_items, use_session, Icon, NavItem};

use crate::Route;

fn route_for(item: NavItem) -> Option<Route> {
    match item {
        NavItem::Home => Some(Route::Landing {}),
        NavItem::Login => Some(Route::Login {}),
        NavItem::Register => Some(Route::Register {}),
        NavItem::AddJob => Some(Route::AddJob {}),
        NavItem::Dashboard => Some(Route::EmployerDashboard {}),
        NavItem::MyApplications => Some(Route::MyApplications {}),
        NavItem::Logout => None,
    }
}

#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "app-shell",
            Header {}
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[component]
fn Header() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut menu_open = use_signal(|| false);

    let current = session.current();
    let items = nav_items(current.as_ref());

    let logout = move |_| {
        session.sign_out();
        menu_open.set(false);
        nav.push(Route::Landing {});
    };

    rsx! {
        header {
            class: "site-header",
            div {
                class: "header-bar",
                Link {
                    class: "brand",
                    to: Route::Landing {},
                    Icon { icon: FaBriefcase, width: 18, height: 18 }
                    " TalentHub"
                }

                button {
                    class: "menu-toggle",
                    "aria-label": "Toggle navigation",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() {
                        Icon { icon: FaXmark, width: 18, height: 18 }
                    } else {
                        Icon { icon: FaBars, width: 18, height: 18 }
                    }
                }
            }

            nav {
                class: if menu_open() { "site-nav open" } else { "site-nav" },
                if let Some(ref user) = current {
                    span { class: "greeting", "{greeting(user)}" }
                }
                for item in items {
                    if let Some(route) = route_for(item) {
                        Link {
                            key: "{item.label()}",
                            class: "nav-link",
                            to: route,
                            onclick: move |_| menu_open.set(false),
                            "{item.label()}"
                        }
                    } else if item.is_action() {
                        button {
                            key: "{item.label()}",
                            class: "nav-link logout",
                            onclick: logout,
                            "{item.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            p { "© 2025 TalentHub. All rights reserved." }
        }
    }
}
