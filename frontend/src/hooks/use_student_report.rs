use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::{Student, StudentReportDetail, TeacherAndSubject};

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Read-only report state: a selected student's resolved detail plus the
/// derived teacher/subject rows for their classroom.
#[derive(Clone, PartialEq)]
pub struct StudentReportState {
    pub students: Vec<Student>,
    pub student_choice: String,
    pub detail: Option<StudentReportDetail>,
    pub teachers_and_subjects: Vec<TeacherAndSubject>,
}

#[derive(Clone)]
pub struct UseStudentReportActions {
    pub select_student: Callback<String>,
}

pub struct UseStudentReportResult {
    pub state: StudentReportState,
    pub actions: UseStudentReportActions,
}

#[hook]
pub fn use_student_report(api_client: &ApiClient) -> UseStudentReportResult {
    let students = use_state(Vec::<Student>::new);
    let student_choice = use_state(String::new);
    let detail = use_state(|| Option::<StudentReportDetail>::None);
    let teachers_and_subjects = use_state(Vec::<TeacherAndSubject>::new);

    use_effect_with((), {
        let api_client = api_client.clone();
        let students = students.clone();
        move |_| {
            spawn_local(async move {
                match api_client.list_students().await {
                    Ok(list) => students.set(list),
                    Err(e) => Logger::error_with_component(
                        "student_report",
                        &format!("Failed to fetch students: {}", e),
                    ),
                }
            });
            || ()
        }
    });

    // Two sequential dependent fetches; reselecting re-issues both.
    let select_student = {
        let api_client = api_client.clone();
        let student_choice = student_choice.clone();
        let detail = detail.clone();
        let teachers_and_subjects = teachers_and_subjects.clone();

        Callback::from(move |value: String| {
            student_choice.set(value.clone());
            let Ok(student_id) = value.trim().parse::<i64>() else {
                detail.set(None);
                teachers_and_subjects.set(Vec::new());
                return;
            };

            let api_client = api_client.clone();
            let detail = detail.clone();
            let teachers_and_subjects = teachers_and_subjects.clone();

            spawn_local(async move {
                match api_client.student_detail(student_id).await {
                    Ok(fetched) => {
                        let student_id = fetched.student_id;
                        detail.set(Some(fetched));
                        match api_client.student_teachers_and_subjects(student_id).await {
                            Ok(rows) => teachers_and_subjects.set(rows),
                            Err(e) => Logger::error_with_component(
                                "student_report",
                                &format!("Failed to fetch teacher and subject rows: {}", e),
                            ),
                        }
                    }
                    Err(e) => Logger::error_with_component(
                        "student_report",
                        &format!("Failed to fetch student details: {}", e),
                    ),
                }
            });
        })
    };

    let state = StudentReportState {
        students: (*students).clone(),
        student_choice: (*student_choice).clone(),
        detail: (*detail).clone(),
        teachers_and_subjects: (*teachers_and_subjects).clone(),
    };

    let actions = UseStudentReportActions { select_student };

    UseStudentReportResult { state, actions }
}
