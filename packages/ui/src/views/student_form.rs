use api::{Student, StudentService};
use dashboard::StudentForm;
use dioxus::prelude::*;

use crate::service::use_student_service;

/// Form for creating a student.
///
/// Local validation failures and server-side rejections are listed above the
/// fields; the fields are cleared only after the service accepts the record.
#[component]
pub fn StudentFormView(
    /// Called with the record the service created.
    #[props(default)]
    on_created: Option<EventHandler<Student>>,
) -> Element {
    let service = use_student_service();
    let mut name = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut errors = use_signal(Vec::<String>::new);
    let mut created = use_signal(|| Option::<Student>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = StudentForm {
            name: name(),
            age: age(),
            email: email(),
        };
        let data = match form.validate() {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Create form rejected: {}", e);
                created.set(None);
                errors.set(vec![e.to_string()]);
                return;
            }
        };

        let service = service.clone();
        spawn(async move {
            errors.set(Vec::new());
            saving.set(true);
            match service.create_student(&data).await {
                Ok(student) => {
                    tracing::info!("Created student {}", student.id);
                    let mut cleared = form;
                    cleared.clear();
                    name.set(cleared.name);
                    age.set(cleared.age);
                    email.set(cleared.email);
                    created.set(Some(student.clone()));
                    if let Some(handler) = on_created {
                        handler.call(student);
                    }
                }
                Err(e) => {
                    tracing::error!("Error creating student: {}", e);
                    created.set(None);
                    errors.set(e.remote_messages());
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "container",
            h1 { "Create Student" }

            form {
                class: "student-form",
                onsubmit: handle_submit,

                if !errors().is_empty() {
                    ul {
                        class: "form-errors",
                        for message in errors() {
                            li { "{message}" }
                        }
                    }
                }

                if let Some(student) = created() {
                    div {
                        class: "form-success",
                        "Created {student.name} (#{student.id})"
                    }
                }

                div {
                    label { r#for: "name", "Name:" }
                    input {
                        r#type: "text",
                        id: "name",
                        name: "name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                div {
                    label { r#for: "age", "Age:" }
                    input {
                        r#type: "number",
                        id: "age",
                        name: "age",
                        value: age(),
                        oninput: move |evt: FormEvent| age.set(evt.value()),
                    }
                }
                div {
                    label { r#for: "email", "Email:" }
                    input {
                        r#type: "email",
                        id: "email",
                        name: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Creating..." } else { "Create" }
                }
            }
        }
    }
}
