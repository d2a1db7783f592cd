use yew::prelude::*;

use crate::hooks::use_students::use_students;
use crate::services::api::ApiClient;
use crate::services::dates::display_date;
use crate::services::notify::use_notifier;

#[derive(Properties, PartialEq)]
pub struct StudentsPageProps {
    pub api_client: ApiClient,
}

fn field_error(message: &Option<String>) -> Html {
    match message {
        Some(message) => html! { <div class="field-error">{message}</div> },
        None => html! {},
    }
}

#[function_component(StudentsPage)]
pub fn students_page(props: &StudentsPageProps) -> Html {
    let notifier = use_notifier();
    let students = use_students(&props.api_client, notifier);
    let state = students.state;
    let actions = students.actions;

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
            <h2>{"Student Registration"}</h2>
            <form class="entity-form" {onsubmit}>
                <div class="form-group">
                    <label for="firstName">{"First Name *"}</label>
                    <input
                        type="text"
                        id="firstName"
                        value={state.form.first_name.clone()}
                        onchange={actions.on_first_name_change.clone()}
                        disabled={state.submitting}
                    />
                    {field_error(&state.errors.first_name)}
                </div>
                <div class="form-group">
                    <label for="lastName">{"Last Name *"}</label>
                    <input
                        type="text"
                        id="lastName"
                        value={state.form.last_name.clone()}
                        onchange={actions.on_last_name_change.clone()}
                        disabled={state.submitting}
                    />
                    {field_error(&state.errors.last_name)}
                </div>
                <div class="form-group">
                    <label for="contactPerson">{"Contact Person *"}</label>
                    <input
                        type="text"
                        id="contactPerson"
                        value={state.form.contact_person.clone()}
                        onchange={actions.on_contact_person_change.clone()}
                        disabled={state.submitting}
                    />
                    {field_error(&state.errors.contact_person)}
                </div>
                <div class="form-group">
                    <label for="contactNo">{"Contact No *"}</label>
                    <input
                        type="text"
                        id="contactNo"
                        value={state.form.contact_no.clone()}
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
                        value={state.form.email_address.clone()}
                        onchange={actions.on_email_change.clone()}
                        disabled={state.submitting}
                    />
                    {field_error(&state.errors.email_address)}
                </div>
                <div class="form-group">
                    <label for="dateOfBirth">{"Date of Birth *"}</label>
                    <input
                        type="date"
                        id="dateOfBirth"
                        value={state.form.date_of_birth.clone()}
                        onchange={actions.on_date_of_birth_change.clone()}
                        disabled={state.submitting}
                    />
                    {field_error(&state.errors.date_of_birth)}
                </div>
                <div class="form-group">
                    <label for="age">{"Age *"}</label>
                    <input
                        type="text"
                        id="age"
                        value={state.age_preview.map(|age| age.to_string()).unwrap_or_default()}
                        disabled=true
                    />
                </div>
                <div class="form-group">
                    <label for="classroom">{"Classroom *"}</label>
                    <select
                        id="classroom"
                        value={state.form.classroom.clone()}
                        onchange={actions.on_classroom_change.clone()}
                        disabled={state.submitting}
                    >
                        <option value="" selected={state.form.classroom.is_empty()}>
                            {"Select Classroom"}
                        </option>
                        {for state.classrooms.iter().map(|classroom| {
                            let value = classroom.classroom_id.to_string();
                            html! {
                                <option
                                    value={value.clone()}
                                    selected={state.form.classroom == value}
                                >
                                    {&classroom.classroom_name}
                                </option>
                            }
                        })}
                    </select>
                    {field_error(&state.errors.classroom)}
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
                html! { <div class="loading">{"Loading students..."}</div> }
            } else {
                html! {
                    <table class="entity-table">
                        <thead>
                            <tr>
                                <th>{"Student ID"}</th>
                                <th>{"First Name"}</th>
                                <th>{"Last Name"}</th>
                                <th>{"Contact Person"}</th>
                                <th>{"Contact Number"}</th>
                                <th>{"DoB"}</th>
                                <th>{"Action"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for state.students.iter().map(|student| {
                                let onedit = {
                                    let edit = actions.edit.clone();
                                    let student = student.clone();
                                    Callback::from(move |_: MouseEvent| edit.emit(student.clone()))
                                };
                                let ondelete = {
                                    let delete = actions.delete.clone();
                                    let student_id = student.student_id;
                                    Callback::from(move |_: MouseEvent| {
                                        if gloo::dialogs::confirm(
                                            "Are you sure you want to delete this student?",
                                        ) {
                                            delete.emit(student_id);
                                        }
                                    })
                                };
                                html! {
                                    <tr key={student.student_id}>
                                        <td>{student.student_id}</td>
                                        <td>{&student.first_name}</td>
                                        <td>{&student.last_name}</td>
                                        <td>{&student.contact_person}</td>
                                        <td>{&student.contact_no}</td>
                                        <td>{display_date(&student.date_of_birth)}</td>
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
