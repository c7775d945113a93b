use dioxus::prelude::*;

use ui::{SessionProvider, ToastProvider};
use views::{
    AddJob, ApplicantOnly, Apply, EmployerDashboard, EmployerOnly, GuestOnly, Landing, Login,
    MyApplications, NotFound, Register, Shell,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},

        #[layout(GuestOnly)]
            #[route("/login")]
            Login {},
            #[route("/register")]
            Register {},
        #[end_layout]

        #[layout(ApplicantOnly)]
            #[route("/apply/:job_id")]
            Apply { job_id: String },
            #[route("/my-applications")]
            MyApplications {},
        #[end_layout]

        #[layout(EmployerOnly)]
            #[route("/add-job")]
            AddJob {},
            #[route("/dashboard")]
            EmployerDashboard {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
