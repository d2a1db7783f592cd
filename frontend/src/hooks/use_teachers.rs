use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::{NewTeacher, Teacher};

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::notify::Notifier;
use crate::services::validation::{validate_teacher_form, TeacherForm, TeacherFormErrors};

#[derive(Clone, PartialEq)]
pub struct TeachersState {
    pub teachers: Vec<Teacher>,
    pub loading: bool,
    pub first_name: String,
    pub last_name: String,
    pub contact_no: String,
    pub email_address: String,
    pub errors: TeacherFormErrors,
    /// Id of the teacher being updated; `None` means the form registers.
    pub editing: Option<i64>,
    pub submitting: bool,
}

#[derive(Clone)]
pub struct UseTeachersActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub edit: Callback<Teacher>,
    pub cancel: Callback<()>,
    pub delete: Callback<i64>,
    pub on_first_name_change: Callback<Event>,
    pub on_last_name_change: Callback<Event>,
    pub on_contact_no_change: Callback<Event>,
    pub on_email_change: Callback<Event>,
}

pub struct UseTeachersResult {
    pub state: TeachersState,
    pub actions: UseTeachersActions,
}

#[hook]
pub fn use_teachers(api_client: &ApiClient, notifier: Notifier) -> UseTeachersResult {
    let teachers = use_state(Vec::<Teacher>::new);
    let loading = use_state(|| true);

    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let contact_no = use_state(String::new);
    let email_address = use_state(String::new);
    let errors = use_state(TeacherFormErrors::default);
    let editing = use_state(|| Option::<i64>::None);
    let submitting = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let teachers = teachers.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let teachers = teachers.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_teachers().await {
                    Ok(list) => teachers.set(list),
                    Err(e) => Logger::error_with_component(
                        "teachers",
                        &format!("Failed to fetch teachers: {}", e),
                    ),
                }
                loading.set(false);
            });
        })
    };

    let clear_form = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let contact_no = contact_no.clone();
        let email_address = email_address.clone();
        let errors = errors.clone();
        let editing = editing.clone();

        Callback::from(move |_: ()| {
            first_name.set(String::new());
            last_name.set(String::new());
            contact_no.set(String::new());
            email_address.set(String::new());
            errors.set(TeacherFormErrors::default());
            editing.set(None);
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let notifier = notifier.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let contact_no = contact_no.clone();
        let email_address = email_address.clone();
        let errors = errors.clone();
        let editing = editing.clone();
        let submitting = submitting.clone();
        let refresh = refresh.clone();
        let clear_form = clear_form.clone();

        Callback::from(move |_| {
            let form = TeacherForm {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                contact_no: (*contact_no).clone(),
                email_address: (*email_address).clone(),
            };

            let found = validate_teacher_form(&form);
            if !found.is_clean() {
                errors.set(found);
                return;
            }
            errors.set(TeacherFormErrors::default());
            submitting.set(true);

            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let submitting = submitting.clone();
            let refresh = refresh.clone();
            let clear_form = clear_form.clone();
            let editing_id = *editing;

            spawn_local(async move {
                let outcome = match editing_id {
                    Some(teacher_id) => {
                        let teacher = Teacher {
                            teacher_id,
                            first_name: form.first_name,
                            last_name: form.last_name,
                            contact_no: form.contact_no,
                            email_address: form.email_address,
                        };
                        api_client.update_teacher(&teacher).await.map(|_| "Teacher updated successfully!")
                    }
                    None => {
                        let teacher = NewTeacher {
                            first_name: form.first_name,
                            last_name: form.last_name,
                            contact_no: form.contact_no,
                            email_address: form.email_address,
                        };
                        api_client.create_teacher(&teacher).await.map(|_| "Teacher registered successfully!")
                    }
                };

                match outcome {
                    Ok(message) => {
                        notifier.success(message);
                        clear_form.emit(());
                        refresh.emit(());
                    }
                    Err(e) => {
                        // The known rejection on this form is a duplicate
                        // contact number; the form fields are preserved.
                        if editing_id.is_none() {
                            notifier.error("A teacher with the same ContactNo already exists.");
                        } else {
                            notifier.error(e.to_string());
                        }
                    }
                }
                submitting.set(false);
            });
        })
    };

    let edit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let contact_no = contact_no.clone();
        let email_address = email_address.clone();
        let errors = errors.clone();
        let editing = editing.clone();

        Callback::from(move |teacher: Teacher| {
            first_name.set(teacher.first_name);
            last_name.set(teacher.last_name);
            contact_no.set(teacher.contact_no);
            email_address.set(teacher.email_address);
            errors.set(TeacherFormErrors::default());
            editing.set(Some(teacher.teacher_id));
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

        Callback::from(move |teacher_id: i64| {
            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.delete_teacher(teacher_id).await {
                    Ok(()) => notifier.success("Teacher deleted successfully!"),
                    Err(e) => notifier.error(e.to_string()),
                }
                // Refetch regardless of the call outcome.
                refresh.emit(());
            });
        })
    };

    let on_first_name_change = {
        let first_name = first_name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            first_name.set(input.value());
        })
    };

    let on_last_name_change = {
        let last_name = last_name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            last_name.set(input.value());
        })
    };

    let on_contact_no_change = {
        let contact_no = contact_no.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            contact_no.set(input.value());
        })
    };

    let on_email_change = {
        let email_address = email_address.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email_address.set(input.value());
        })
    };

    // Load the table on mount.
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = TeachersState {
        teachers: (*teachers).clone(),
        loading: *loading,
        first_name: (*first_name).clone(),
        last_name: (*last_name).clone(),
        contact_no: (*contact_no).clone(),
        email_address: (*email_address).clone(),
        errors: (*errors).clone(),
        editing: *editing,
        submitting: *submitting,
    };

    let actions = UseTeachersActions {
        refresh,
        submit,
        edit,
        cancel,
        delete,
        on_first_name_change,
        on_last_name_change,
        on_contact_no_change,
        on_email_change,
    };

    UseTeachersResult { state, actions }
}
