use api::submit_user;
use dioxus::prelude::*;
use store::{Field, FormMode, FormState, User};

use crate::{use_user_service, use_user_store};

/// Create/edit form for a single user.
///
/// Pass `user` to edit it, or `None` to create. The form validates locally, sends
/// the record, reports it to the store and then calls `on_close`. A failed request
/// keeps the form open with an inline message.
#[component]
pub fn UserForm(#[props(!optional)] user: Option<User>, on_close: EventHandler<()>) -> Element {
    let mut store = use_user_store();
    let service = use_user_service();
    let mut form_state = use_signal(|| FormState::new(user.as_ref()));
    let mut submitting = use_signal(|| false);
    // Only a blank form grabs focus, and only on first mount.
    let focus_id = use_hook(|| form_state.peek().draft.is_new());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let service = service.clone();
        let state = form_state();
        spawn(async move {
            submitting.set(true);
            let result = submit_user(&service, state.mode, &state.draft, |action| {
                store.write().reduce(action)
            })
            .await;
            submitting.set(false);
            match result {
                Ok(_) => on_close.call(()),
                Err(err) => {
                    tracing::debug!("User form rejected: {err}");
                    form_state.write().reject(err);
                }
            }
        });
    };

    let state = form_state.read();
    let mode = state.mode;
    let submit_label = mode.submit_label();
    let submission_error = state.submission_error.as_ref().map(ToString::to_string);

    rsx! {
        div {
            class: "user-form",
            form {
                onsubmit: handle_submit,
                ul {
                    class: "form-grid",
                    FormField {
                        form_state,
                        field: Field::Id,
                        label: "User ID:",
                        placeholder: "User Id",
                        input_type: "number",
                        readonly: mode == FormMode::Edit,
                        autofocus: focus_id,
                    }
                    FormField {
                        form_state,
                        field: Field::FirstName,
                        label: "First Name:",
                        placeholder: "First Name",
                    }
                    FormField {
                        form_state,
                        field: Field::LastName,
                        label: "Last Name:",
                        placeholder: "Last Name",
                    }
                    FormField {
                        form_state,
                        field: Field::Email,
                        label: "E Mail:",
                        placeholder: "E Mail",
                        input_type: "email",
                    }
                    FormField {
                        form_state,
                        field: Field::Department,
                        label: "Department:",
                        placeholder: "Department",
                    }
                }
                if let Some(message) = submission_error {
                    p { class: "error", "{message}" }
                }
                div {
                    class: "form-actions",
                    button {
                        r#type: "submit",
                        disabled: submitting(),
                        "{submit_label}"
                    }
                    button {
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

/// Labelled input bound to one draft field, with its validation message.
#[component]
fn FormField(
    form_state: Signal<FormState>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] readonly: bool,
    #[props(default)] autofocus: bool,
) -> Element {
    let state = form_state.read();
    let value = state.draft.field(field).to_string();
    let error = state.errors.get(field);

    rsx! {
        li {
            label {
                "{label}"
                input {
                    r#type: input_type,
                    value: "{value}",
                    placeholder,
                    readonly,
                    oninput: move |evt: FormEvent| form_state.write().draft.set_field(field, evt.value()),
                    onmounted: move |evt: MountedEvent| async move {
                        if autofocus {
                            if let Err(e) = evt.data().set_focus(true).await {
                                tracing::debug!("Could not focus input: {e:?}");
                            }
                        }
                    },
                }
                if let Some(message) = error {
                    p { class: "error", "{message}" }
                }
            }
        }
    }
}
