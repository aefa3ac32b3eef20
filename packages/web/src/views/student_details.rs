use dioxus::prelude::*;
use ui::use_api_config;
use ui::views::StudentDetailView;

use crate::Route;

#[component]
pub fn StudentDetails(id: u64) -> Element {
    let nav = use_navigator();
    let per_page = use_api_config().default_per_page;

    rsx! {
        StudentDetailView {
            id,
            on_back: move |_| {
                nav.push(Route::StudentIndex { page: 1, per_page });
            },
        }
    }
}
