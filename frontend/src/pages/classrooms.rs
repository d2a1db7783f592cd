use yew::prelude::*;

use crate::hooks::use_classrooms::use_classrooms;
use crate::services::api::ApiClient;
use crate::services::notify::use_notifier;

#[derive(Properties, PartialEq)]
pub struct ClassroomsPageProps {
    pub api_client: ApiClient,
}

#[function_component(ClassroomsPage)]
pub fn classrooms_page(props: &ClassroomsPageProps) -> Html {
    let notifier = use_notifier();
    let classrooms = use_classrooms(&props.api_client, notifier);
    let state = classrooms.state;
    let actions = classrooms.actions;

    let onsubmit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div class="page">
            <h2>{"Classrooms"}</h2>
            <form class="entity-form" {onsubmit}>
                <div class="form-group">
                    <label for="classroomName">{"Classroom Name *"}</label>
                    <input
                        type="text"
                        id="classroomName"
                        value={state.name.clone()}
                        onchange={actions.on_name_change.clone()}
                        disabled={state.submitting}
                    />
                    {if let Some(error) = &state.name_error {
                        html! { <div class="field-error">{error}</div> }
                    } else {
                        html! {}
                    }}
                </div>
                <div class="form-buttons">
                    <button type="submit" class="btn btn-primary" disabled={state.submitting}>
                        {"Add Classroom"}
                    </button>
                </div>
            </form>

            {if state.loading {
                html! { <div class="loading">{"Loading classrooms..."}</div> }
            } else {
                html! {
                    <table class="entity-table">
                        <thead>
                            <tr>
                                <th>{"Classroom ID"}</th>
                                <th>{"Classroom Name"}</th>
                                <th>{"Action"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for state.classrooms.iter().map(|classroom| {
                                let ondelete = {
                                    let delete = actions.delete.clone();
                                    let classroom_id = classroom.classroom_id;
                                    Callback::from(move |_: MouseEvent| {
                                        if gloo::dialogs::confirm(
                                            "Are you sure you want to delete this classroom?",
                                        ) {
                                            delete.emit(classroom_id);
                                        }
                                    })
                                };
                                html! {
                                    <tr key={classroom.classroom_id}>
                                        <td>{classroom.classroom_id}</td>
                                        <td>{&classroom.classroom_name}</td>
                                        <td>
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
