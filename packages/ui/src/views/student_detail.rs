use api::{StudentId, StudentService};
use dioxus::prelude::*;

use crate::service::use_student_service;

/// Read-only view of one student, fetched by id.
#[component]
pub fn StudentDetailView(
    id: StudentId,
    /// Called when the "Back" link is pressed.
    on_back: EventHandler<()>,
) -> Element {
    // Track id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let service = use_student_service();
    let student = use_resource(move || {
        let id = id_signal();
        let service = service.clone();
        async move {
            let result = service.get_student(id).await;
            if let Err(e) = &result {
                tracing::error!("Error fetching student {}: {}", id, e);
            }
            result
        }
    });

    rsx! {
        div {
            class: "container",
            match student.cloned() {
                None => rsx! {
                    div { class: "loading-spinner", "Loading..." }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "error-message",
                        for message in e.remote_messages() {
                            p { "{message}" }
                        }
                    }
                },
                Some(Ok(student)) => {
                    let created = student.created_display();
                    let updated = student.updated_display();
                    rsx! {
                        h1 { "{student.name}" }
                        p { "Age: {student.age}" }
                        p { "Email: {student.email}" }
                        p { "Created: {created}" }
                        p { "Updated: {updated}" }
                    }
                }
            }
            button {
                class: "back-button",
                onclick: move |_| on_back.call(()),
                "Back to list"
            }
        }
    }
}
