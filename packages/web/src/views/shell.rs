use dioxus::prelude::*;
use ui::{use_api_config, Navbar};

use crate::Route;

/// Page frame shared by every route: title and navigation above the routed view.
#[component]
pub fn Shell() -> Element {
    let per_page = use_api_config().default_per_page;

    rsx! {
        div {
            class: "app",
            Navbar {
                span { class: "app-title", "Welcome to the Student Dashboard" }
                Link { to: Route::StudentIndex { page: 1, per_page }, "Student List" }
                Link { to: Route::CreateStudent {}, "Create Student" }
            }
            Outlet::<Route> {}
        }
    }
}
