use yew::prelude::*;

use crate::hooks::use_subjects::use_subjects;
use crate::services::api::ApiClient;
use crate::services::notify::use_notifier;

#[derive(Properties, PartialEq)]
pub struct SubjectsPageProps {
    pub api_client: ApiClient,
}

#[function_component(SubjectsPage)]
pub fn subjects_page(props: &SubjectsPageProps) -> Html {
    let notifier = use_notifier();
    let subjects = use_subjects(&props.api_client, notifier);
    let state = subjects.state;
    let actions = subjects.actions;

    let onsubmit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div class="page">
            <h2>{"Subject Registration"}</h2>
            <form class="entity-form" {onsubmit}>
                <div class="form-group">
                    <label for="subjectName">{"Subject Name *"}</label>
                    <input
                        type="text"
                        id="subjectName"
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
                        {"Add Subject"}
                    </button>
                </div>
            </form>

            {if state.loading {
                html! { <div class="loading">{"Loading subjects..."}</div> }
            } else {
                html! {
                    <table class="entity-table">
                        <thead>
                            <tr>
                                <th>{"Subject ID"}</th>
                                <th>{"Subject Name"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for state.subjects.iter().map(|subject| html! {
                                <tr key={subject.subject_id}>
                                    <td>{subject.subject_id}</td>
                                    <td>{&subject.subject_name}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            }}
        </div>
    }
}
