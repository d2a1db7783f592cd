use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use shared::{Classroom, NewStudent, Student};

use crate::services::api::ApiClient;
use crate::services::dates::display_date;
use crate::services::logging::Logger;
use crate::services::notify::Notifier;
use crate::services::validation::{
    age_in_years, validate_date_of_birth, validate_student_form, StudentForm, StudentFormErrors,
};

#[derive(Clone, PartialEq)]
pub struct StudentsState {
    pub students: Vec<Student>,
    pub classrooms: Vec<Classroom>,
    pub loading: bool,
    pub form: StudentForm,
    pub errors: StudentFormErrors,
    /// Derived age shown in the disabled field; recomputed from the
    /// date-of-birth input whenever it parses.
    pub age_preview: Option<i32>,
    pub editing: Option<i64>,
    pub submitting: bool,
}

#[derive(Clone)]
pub struct UseStudentsActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub edit: Callback<Student>,
    pub cancel: Callback<()>,
    pub delete: Callback<i64>,
    pub on_first_name_change: Callback<Event>,
    pub on_last_name_change: Callback<Event>,
    pub on_contact_person_change: Callback<Event>,
    pub on_contact_no_change: Callback<Event>,
    pub on_email_change: Callback<Event>,
    pub on_date_of_birth_change: Callback<Event>,
    pub on_classroom_change: Callback<Event>,
}

pub struct UseStudentsResult {
    pub state: StudentsState,
    pub actions: UseStudentsActions,
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[hook]
pub fn use_students(api_client: &ApiClient, notifier: Notifier) -> UseStudentsResult {
    let students = use_state(Vec::<Student>::new);
    let classrooms = use_state(Vec::<Classroom>::new);
    let loading = use_state(|| true);

    let form = use_state(StudentForm::default);
    let errors = use_state(StudentFormErrors::default);
    let editing = use_state(|| Option::<i64>::None);
    let submitting = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let students = students.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let students = students.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_students().await {
                    Ok(list) => students.set(list),
                    Err(e) => Logger::error_with_component(
                        "students",
                        &format!("Failed to fetch students: {}", e),
                    ),
                }
                loading.set(false);
            });
        })
    };

    // The classroom dropdown is loaded once on mount, alongside the table.
    use_effect_with((), {
        let api_client = api_client.clone();
        let classrooms = classrooms.clone();
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            spawn_local(async move {
                match api_client.list_classrooms().await {
                    Ok(list) => classrooms.set(list),
                    Err(e) => Logger::error_with_component(
                        "students",
                        &format!("Failed to fetch classrooms: {}", e),
                    ),
                }
            });
            || ()
        }
    });

    let clear_form = {
        let form = form.clone();
        let errors = errors.clone();
        let editing = editing.clone();

        Callback::from(move |_: ()| {
            form.set(StudentForm::default());
            errors.set(StudentFormErrors::default());
            editing.set(None);
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let notifier = notifier.clone();
        let form = form.clone();
        let errors = errors.clone();
        let editing = editing.clone();
        let submitting = submitting.clone();
        let refresh = refresh.clone();
        let clear_form = clear_form.clone();

        Callback::from(move |_| {
            let current = (*form).clone();
            let submission_date = today();

            let found = validate_student_form(&current, submission_date);
            if !found.is_clean() {
                errors.set(found);
                return;
            }
            errors.set(StudentFormErrors::default());

            // Validation guarantees these parse.
            let Ok(dob) = validate_date_of_birth(&current.date_of_birth, submission_date) else {
                return;
            };
            let Ok(classroom_id) = current.classroom.trim().parse::<i64>() else {
                return;
            };
            let age = age_in_years(dob, submission_date);

            submitting.set(true);

            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let submitting = submitting.clone();
            let refresh = refresh.clone();
            let clear_form = clear_form.clone();
            let editing_id = *editing;

            spawn_local(async move {
                let outcome = match editing_id {
                    Some(student_id) => {
                        let student = Student {
                            student_id,
                            first_name: current.first_name,
                            last_name: current.last_name,
                            contact_person: current.contact_person,
                            contact_no: current.contact_no,
                            email_address: current.email_address,
                            date_of_birth: current.date_of_birth,
                            age,
                            classroom_id,
                        };
                        api_client.update_student(&student).await.map(|_| "Student updated successfully!")
                    }
                    None => {
                        let student = NewStudent {
                            first_name: current.first_name,
                            last_name: current.last_name,
                            contact_person: current.contact_person,
                            contact_no: current.contact_no,
                            email_address: current.email_address,
                            date_of_birth: current.date_of_birth,
                            age,
                            classroom_id,
                        };
                        api_client.create_student(&student).await.map(|_| "Student registered successfully!")
                    }
                };

                match outcome {
                    Ok(message) => {
                        notifier.success(message);
                        clear_form.emit(());
                        refresh.emit(());
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                submitting.set(false);
            });
        })
    };

    let edit = {
        let form = form.clone();
        let errors = errors.clone();
        let editing = editing.clone();

        Callback::from(move |student: Student| {
            editing.set(Some(student.student_id));
            form.set(StudentForm {
                first_name: student.first_name,
                last_name: student.last_name,
                contact_person: student.contact_person,
                contact_no: student.contact_no,
                email_address: student.email_address,
                // The backend value may carry a time suffix the date input
                // (and the strict validator) would reject.
                date_of_birth: display_date(&student.date_of_birth).to_string(),
                classroom: student.classroom_id.to_string(),
            });
            errors.set(StudentFormErrors::default());
        })
    };

    let cancel = {
        let clear_form = clear_form.clone();
        Callback::from(move |_| clear_form.emit(()))
    };

    let delete = {
        let api_client = api_client.clone();
        let notifier = notifier.clone();
        let refresh = refresh.clone();

        Callback::from(move |student_id: i64| {
            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.delete_student(student_id).await {
                    Ok(()) => notifier.success("Student deleted successfully!"),
                    Err(e) => notifier.error(e.to_string()),
                }
                // Refetch regardless of the call outcome.
                refresh.emit(());
            });
        })
    };

    fn field_setter(
        form: &UseStateHandle<StudentForm>,
        apply: fn(&mut StudentForm, String),
    ) -> Callback<Event> {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    }

    let on_first_name_change = field_setter(&form, |f, v| f.first_name = v);
    let on_last_name_change = field_setter(&form, |f, v| f.last_name = v);
    let on_contact_person_change = field_setter(&form, |f, v| f.contact_person = v);
    let on_contact_no_change = field_setter(&form, |f, v| f.contact_no = v);
    let on_email_change = field_setter(&form, |f, v| f.email_address = v);
    let on_date_of_birth_change = field_setter(&form, |f, v| f.date_of_birth = v);

    let on_classroom_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.classroom = select.value();
            form.set(next);
        })
    };

    let age_preview = validate_date_of_birth(&form.date_of_birth, today())
        .ok()
        .map(|dob| age_in_years(dob, today()));

    let state = StudentsState {
        students: (*students).clone(),
        classrooms: (*classrooms).clone(),
        loading: *loading,
        form: (*form).clone(),
        errors: (*errors).clone(),
        age_preview,
        editing: *editing,
        submitting: *submitting,
    };

    let actions = UseStudentsActions {
        refresh,
        submit,
        edit,
        cancel,
        delete,
        on_first_name_change,
        on_last_name_change,
        on_contact_person_change,
        on_contact_no_change,
        on_email_change,
        on_date_of_birth_change,
        on_classroom_change,
    };

    UseStudentsResult { state, actions }
}
