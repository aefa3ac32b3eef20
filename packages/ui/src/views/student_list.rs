use api::{Student, StudentId, StudentService};
use dashboard::{ListView, PageQuery, StudentList, SummarySlot};
use dioxus::prelude::*;

use crate::service::use_student_service;
use crate::style::ListStyle;

/// Paginated student list with on-demand summaries.
///
/// The page position comes in as a prop (the route owns it); page changes are
/// reported through `on_page_change` so the platform can rewrite the URL, which
/// in turn feeds a new `query` back in and reloads.
#[component]
pub fn StudentListView(
    query: PageQuery,
    /// Called with the position to navigate to.
    on_page_change: EventHandler<PageQuery>,
    /// Called when a student's name is clicked.
    on_open_student: EventHandler<StudentId>,
    #[props(default)] style: ListStyle,
) -> Element {
    // Track the query in a signal so use_resource re-runs on route change
    let mut query_signal = use_signal(|| query);
    if *query_signal.peek() != query {
        query_signal.set(query);
    }

    let mut list = use_signal(StudentList::new);
    let service = use_student_service();

    let load_service = service.clone();
    let _loader = use_resource(move || {
        let query = query_signal();
        let service = load_service.clone();
        async move {
            let ticket = list.write().begin_load(query);
            let result = service.list_students(query.page, query.per_page).await;
            list.write().finish_load(ticket, result);
        }
    });

    let toggle_summary = use_callback(move |id: StudentId| {
        if !list.write().toggle_summary(id) {
            return;
        }
        let service = service.clone();
        spawn(async move {
            let result = service.get_summary(id).await;
            list.write().finish_summary(id, result);
        });
    });

    let state = list();
    let pagination = state.pagination();
    let page_label = pagination.label();
    let previous = pagination
        .previous
        .map(|control| (control, state.change_page(control.target)));
    let next = pagination
        .next
        .map(|control| (control, state.change_page(control.target)));

    rsx! {
        div {
            class: "container",
            h1 { "Student List" }

            match state.view() {
                ListView::Loading => rsx! {
                    div {
                        class: "loading-spinner",
                        span { "Loading students..." }
                        div { class: "spinner" }
                    }
                },
                ListView::Error(message) => rsx! {
                    div { class: "error-message", "{message}" }
                },
                ListView::Empty => rsx! {
                    p { class: "empty-state", "No students found." }
                },
                ListView::Records(students) => rsx! {
                    ul {
                        class: "student-list",
                        for student in students.iter() {
                            StudentRow {
                                key: "{student.id}",
                                student: student.clone(),
                                slot: state.slot(student.id).clone(),
                                style,
                                on_toggle: toggle_summary,
                                on_open: on_open_student,
                            }
                        }
                    }
                },
            }

            div {
                class: "pagination",
                if let Some((control, target)) = previous {
                    button {
                        style: "{style.page_button}",
                        disabled: !control.enabled,
                        onclick: move |_| on_page_change.call(target),
                        "Previous"
                    }
                }
                span { class: "pagination-label", "{page_label}" }
                if let Some((control, target)) = next {
                    button {
                        style: "{style.page_button}",
                        disabled: !control.enabled,
                        onclick: move |_| on_page_change.call(target),
                        "Next"
                    }
                }
            }

            if let Some(total) = state.total() {
                p { class: "student-count", "{total} students in total" }
            }
        }
    }
}

/// One student with its summary button and panel.
#[component]
fn StudentRow(
    student: Student,
    slot: SummarySlot,
    style: ListStyle,
    on_toggle: EventHandler<StudentId>,
    on_open: EventHandler<StudentId>,
) -> Element {
    let id = student.id;
    let button_label = if slot.is_fetching() {
        "Generating Summary..."
    } else if slot.is_expanded() {
        "Hide Summary"
    } else {
        "View Summary"
    };

    rsx! {
        li {
            div {
                a {
                    href: "/students/{id}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_open.call(id);
                    },
                    "{student.name}"
                }
                button {
                    style: "{style.summary_button}",
                    onclick: move |_| on_toggle.call(id),
                    "{button_label}"
                }
            }

            if slot.is_expanded() {
                div {
                    class: "summary active",
                    if slot.is_fetching() {
                        div {
                            class: "loading-spinner",
                            span { "Generating Summary..." }
                            div { class: "spinner" }
                        }
                    } else if let Some(text) = slot.text() {
                        for line in text.lines() {
                            p { style: "{style.summary_text}", "{line}" }
                        }
                        if let Some(source) = slot.source() {
                            small { class: "summary-source", "Source: {source}" }
                        }
                    }
                }
            }
        }
    }
}
