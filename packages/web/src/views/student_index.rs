use dashboard::PageQuery;
use dioxus::prelude::*;
use ui::views::StudentListView;
use ui::{use_api_config, ListStyle};

use crate::Route;

/// `/?page&per_page`. Missing or zero values fall back to the defaults.
#[component]
pub fn StudentIndex(page: u32, per_page: u32) -> Element {
    let nav = use_navigator();
    let query = PageQuery::new(page, per_page, use_api_config().default_per_page);

    rsx! {
        StudentListView {
            query,
            style: ListStyle::DEFAULT,
            on_page_change: move |next: PageQuery| {
                nav.push(Route::StudentIndex {
                    page: next.page,
                    per_page: next.per_page,
                });
            },
            on_open_student: move |id| {
                nav.push(Route::StudentDetails { id });
            },
        }
    }
}
