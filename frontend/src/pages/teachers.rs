use yew::prelude::*;

use crate::hooks::use_teachers::use_teachers;
use crate::services::api::ApiClient;
use crate::services::notify::use_notifier;

#[derive(Properties, PartialEq)]
pub struct TeachersPageProps {
    pub api_client: ApiClient,
}

fn field_error(message: &Option<String>) -> Html {
    match message {
        Some(message) => html! { <div class="field-error">{message}</div> },
        None => html! {},
    }
}

#[function_component(TeachersPage)]
pub fn teachers_page(props: &TeachersPageProps) -> Html {
    let notifier = use_notifier();
    let teachers = use_teachers(&props.api_client, notifier);
    let state = teachers.state;
    let actions = teachers.actions;

    let onsubmit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let oncancel = {
        let cancel = actions.cancel.clone();
        Callback::from(move |_: MouseEvent| cancel.emit(()))
    };

    html! {
        <div class="page">
            <h2>{"Teacher Registration"}</h2>
            <form class="entity-form" {onsubmit}>
                <div class="form-group">
                    <label for="firstName">{"First Name *"}</label>
                    <input
                        type="text"
                        id="firstName"
                        value={state.first_name.clone()}
                        onchange={actions.on_first_name_change.clone()}
                        disabled={state.submitting}
                    />
                    {field_error(&state.errors.first_name)}
                </div>
                <div class="form-group">
                    <label for="lastName">{"Last Name"}</label>
                    <input
                        type="text"
                        id="lastName"
                        value={state.last_name.clone()}
                        onchange={actions.on_last_name_change.clone()}
                        disabled={state.submitting}
                    />
                </div>
                <div class="form-group">
                    <label for="contactNo">{"Contact No *"}</label>
                    <input
                        type="text"
                        id="contactNo"
                        value={state.contact_no.clone()}
                        onchange={actions.on_contact_no_change.clone()}
                        disabled={state.submitting}
                    />
                    {field_error(&state.errors.contact_no)}
                </div>
                <div class="form-group">
                    <label for="email">{"Email Address *"}</label>
                    <input
                        type="email"
                        id="email"
                        value={state.email_address.clone()}
                        onchange={actions.on_email_change.clone()}
                        disabled={state.submitting}
                    />
                    {field_error(&state.errors.email_address)}
                </div>
                <div class="form-buttons">
                    <button type="submit" class="btn btn-primary" disabled={state.submitting}>
                        {if state.editing.is_some() { "Update" } else { "Register" }}
                    </button>
                    <button type="button" class="btn btn-outline-danger" onclick={oncancel}>
                        {"Cancel"}
                    </button>
                </div>
            </form>

            {if state.loading {
                html! { <div class="loading">{"Loading teachers..."}</div> }
            } else {
                html! {
                    <table class="entity-table">
                        <thead>
                            <tr>
                                <th>{"First Name"}</th>
                                <th>{"Last Name"}</th>
                                <th>{"Contact No"}</th>
                                <th>{"Email Address"}</th>
                                <th>{"Action"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for state.teachers.iter().map(|teacher| {
                                let onedit = {
                                    let edit = actions.edit.clone();
                                    let teacher = teacher.clone();
                                    Callback::from(move |_: MouseEvent| edit.emit(teacher.clone()))
                                };
                                let ondelete = {
                                    let delete = actions.delete.clone();
                                    let teacher_id = teacher.teacher_id;
                                    Callback::from(move |_: MouseEvent| {
                                        if gloo::dialogs::confirm(
                                            "Are you sure you want to delete this teacher?",
                                        ) {
                                            delete.emit(teacher_id);
                                        }
                                    })
                                };
                                html! {
                                    <tr key={teacher.teacher_id}>
                                        <td>{&teacher.first_name}</td>
                                        <td>{&teacher.last_name}</td>
                                        <td>{&teacher.contact_no}</td>
                                        <td>{&teacher.email_address}</td>
                                        <td>
                                            <button class="btn btn-info" onclick={onedit}>{"Update"}</button>
                                            <button class="btn btn-danger" onclick={ondelete}>{"Delete"}</button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}
        </div>
    }
}
