mod layout;
pub use layout::Shell;

mod guards;
pub use guards::{ApplicantOnly, EmployerOnly, GuestOnly};

mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod apply;
pub use apply::Apply;

mod my_applications;
pub use my_applications::MyApplications;

mod job_form;

mod add_job;
pub use add_job::AddJob;

mod employer_dashboard;
pub use employer_dashboard::EmployerDashboard;

mod not_found;
pub use not_found::NotFound;
