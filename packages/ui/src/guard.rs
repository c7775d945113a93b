//! Route access rules.
//!
//! | Access      | Anonymous      | Applicant      | Employer       |
//! |-------------|----------------|----------------|----------------|
//! | `Public`    | render         | render         | render         |
//! | `Guest`     | render         | redirect home  | redirect home  |
//! | `Applicant` | redirect login | render         | redirect home  |
//! | `Employer`  | redirect login | redirect home  | render         |
//!
//! [`check`] is pure so the table above is testable without a renderer;
//! the router layouts in the web crate turn a [`Redirect`] into navigation.

use api::{Role, Session};

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Only anonymous visitors (login and registration).
    Guest,
    Applicant,
    Employer,
}

/// Where a refused visitor is sent instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    Home,
    Login,
}

impl Access {
    fn required_role(self) -> Option<Role> {
        match self {
            Access::Applicant => Some(Role::Applicant),
            Access::Employer => Some(Role::Employer),
            Access::Public | Access::Guest => None,
        }
    }
}

/// Decide whether `session` may view a route with `access`.
pub fn check(access: Access, session: Option<&Session>) -> Result<(), Redirect> {
    match (access, session) {
        (Access::Public, _) => Ok(()),
        (Access::Guest, None) => Ok(()),
        (Access::Guest, Some(_)) => Err(Redirect::Home),
        (_, None) => Err(Redirect::Login),
        (access, Some(session)) => {
            if access.required_role() == Some(session.role) {
                Ok(())
            } else {
                Err(Redirect::Home)
            }
        }
    }
}
