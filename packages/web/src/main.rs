use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::ApiProvider;
use views::{CreateStudent, Shell, StudentDetails, StudentIndex};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/?:page&:per_page")]
        StudentIndex { page: u32, per_page: u32 },
        #[route("/students")]
        CreateStudent {},
        #[route("/students/:id")]
        StudentDetails { id: u64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logger: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ApiProvider {
            Router::<Route> {}
        }
    }
}
