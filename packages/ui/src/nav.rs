//! Role-gated navigation model shared by the header and its mobile menu.

use api::{Role, Session};

/// One entry in the site navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Login,
    Register,
    AddJob,
    Dashboard,
    MyApplications,
    Logout,
}

impl NavItem {
    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Login => "Login",
            NavItem::Register => "Register",
            NavItem::AddJob => "Add Job",
            NavItem::Dashboard => "Dashboard",
            NavItem::MyApplications => "My Applications",
            NavItem::Logout => "Logout",
        }
    }

    /// Whether the entry is an action rather than a link.
    pub fn is_action(self) -> bool {
        matches!(self, NavItem::Logout)
    }
}

/// Navigation entries visible to `session`, in display order.
pub fn nav_items(session: Option<&Session>) -> Vec<NavItem> {
    let mut items = vec![NavItem::Home];
    match session.map(|s| s.role) {
        None => {
            items.push(NavItem::Login);
            items.push(NavItem::Register);
        }
        Some(Role::Employer) => {
            items.push(NavItem::AddJob);
            items.push(NavItem::Dashboard);
            items.push(NavItem::Logout);
        }
        Some(Role::Applicant) => {
            items.push(NavItem::MyApplications);
            items.push(NavItem::Logout);
        }
    }
    items
}

/// Greeting shown next to the navigation for a signed-in user.
pub fn greeting(session: &Session) -> String {
    format!("Hi, {}", session.display_name())
}
