use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_allocations::{use_allocations, SubjectAllocationApi};
use crate::services::api::ApiClient;
use crate::services::notify::use_notifier;

#[derive(Properties, PartialEq)]
pub struct AllocateSubjectsPageProps {
    pub api_client: ApiClient,
}

#[function_component(AllocateSubjectsPage)]
pub fn allocate_subjects_page(props: &AllocateSubjectsPageProps) -> Html {
    let notifier = use_notifier();
    let provider = SubjectAllocationApi {
        api: props.api_client.clone(),
    };
    let allocations = use_allocations::<SubjectAllocationApi>(provider, notifier);
    let state = allocations.state;
    let actions = allocations.actions;

    let on_teacher_change = {
        let select_teacher = actions.select_teacher.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            select_teacher.emit(select.value());
        })
    };

    let on_subject_change = {
        let set_target = actions.set_target.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_target.emit(select.value());
        })
    };

    let onsubmit = {
        let allocate = actions.allocate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            allocate.emit(());
        })
    };

    html! {
        <div class="page">
            <h2>{"Allocate Subjects"}</h2>
            <form class="entity-form" {onsubmit}>
                <div class="form-group">
                    <label for="teacher">{"Teacher *"}</label>
                    <select id="teacher" onchange={on_teacher_change}>
                        <option value="" selected={state.teacher_choice.is_empty()}>
                            {"Select Teacher"}
                        </option>
                        {for state.teachers.iter().map(|teacher| {
                            let value = teacher.teacher_id.to_string();
                            html! {
                                <option
                                    value={value.clone()}
                                    selected={state.teacher_choice == value}
                                >
                                    {&teacher.first_name}
                                </option>
                            }
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="subject">{"Subject *"}</label>
                    <select id="subject" onchange={on_subject_change}>
                        <option value="" selected={state.target_choice.is_empty()}>
                            {"Select Subject"}
                        </option>
                        {for state.targets.iter().map(|subject| {
                            let value = subject.subject_id.to_string();
                            html! {
                                <option
                                    value={value.clone()}
                                    selected={state.target_choice == value}
                                >
                                    {&subject.subject_name}
                                </option>
                            }
                        })}
                    </select>
                </div>
                <div class="form-buttons">
                    <button type="submit" class="btn btn-primary">{"Allocate Subject"}</button>
                </div>
            </form>

            <h3>{"Allocated Subjects"}</h3>
            <table class="entity-table">
                <thead>
                    <tr>
                        <th>{"Subject"}</th>
                        <th>{"Action"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for state.allocations.iter().map(|allocation| {
                        let ondelete = {
                            let delete = actions.delete.clone();
                            let allocation_id = allocation.allocate_subject_id;
                            Callback::from(move |_: MouseEvent| delete.emit(allocation_id))
                        };
                        html! {
                            <tr key={allocation.allocate_subject_id}>
                                <td>{&allocation.subject_name}</td>
                                <td>
                                    <button class="btn btn-danger" onclick={ondelete}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
