use api::Student;
use dioxus::prelude::*;
use ui::views::StudentFormView;

#[component]
pub fn CreateStudent() -> Element {
    rsx! {
        StudentFormView {
            on_created: move |student: Student| {
                tracing::debug!("Student {} created from the form", student.id);
            },
        }
    }
}
