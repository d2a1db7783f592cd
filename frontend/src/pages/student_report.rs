use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_student_report::use_student_report;
use crate::services::api::ApiClient;
use crate::services::dates::display_date;

#[derive(Properties, PartialEq)]
pub struct StudentReportPageProps {
    pub api_client: ApiClient,
}

fn detail_field(label: &str, id: &str, value: String) -> Html {
    html! {
        <div class="form-group">
            <label for={id.to_string()}>{label}</label>
            <input type="text" id={id.to_string()} value={value} readonly=true />
        </div>
    }
}

#[function_component(StudentReportPage)]
pub fn student_report_page(props: &StudentReportPageProps) -> Html {
    let report = use_student_report(&props.api_client);
    let state = report.state;
    let actions = report.actions;

    let on_student_change = {
        let select_student = actions.select_student.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            select_student.emit(select.value());
        })
    };

    html! {
        <div class="page">
            <h2>{"Student Report"}</h2>
            <div class="form-group">
                <label for="student">{"Student"}</label>
                <select id="student" onchange={on_student_change}>
                    <option value="" selected={state.student_choice.is_empty()}>
                        {"Select Student"}
                    </option>
                    {for state.students.iter().map(|student| {
                        let value = student.student_id.to_string();
                        html! {
                            <option
                                value={value.clone()}
                                selected={state.student_choice == value}
                            >
                                {format!("{} {}", student.first_name, student.last_name)}
                            </option>
                        }
                    })}
                </select>
            </div>

            {if let Some(detail) = &state.detail {
                html! {
                    <>
                        <div class="report-detail">
                            {detail_field("Contact Person", "contactPerson", detail.contact_person.clone())}
                            {detail_field("Contact Number", "contactNo", detail.contact_no.clone())}
                            {detail_field("Classroom", "classroom", detail.classroom_name.clone())}
                            {detail_field("Email Address", "email", detail.email_address.clone())}
                            {detail_field(
                                "Date of Birth",
                                "dateOfBirth",
                                display_date(&detail.date_of_birth).to_string(),
                            )}
                        </div>
                        <table class="entity-table bordered">
                            <thead>
                                <tr>
                                    <th>{"Subject Name"}</th>
                                    <th>{"Teacher"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for state.teachers_and_subjects.iter().enumerate().map(|(i, row)| html! {
                                    <tr key={i}>
                                        <td>{&row.subject_name}</td>
                                        <td>{format!("{} {}", row.teacher_first_name, row.teacher_last_name)}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
