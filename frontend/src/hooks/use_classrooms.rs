use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::Classroom;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::notify::Notifier;
use crate::services::validation::require;

#[derive(Clone, PartialEq)]
pub struct ClassroomsState {
    pub classrooms: Vec<Classroom>,
    pub loading: bool,
    pub name: String,
    pub name_error: Option<String>,
    pub submitting: bool,
}

#[derive(Clone)]
pub struct UseClassroomsActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub delete: Callback<i64>,
    pub on_name_change: Callback<Event>,
}

pub struct UseClassroomsResult {
    pub state: ClassroomsState,
    pub actions: UseClassroomsActions,
}

#[hook]
pub fn use_classrooms(api_client: &ApiClient, notifier: Notifier) -> UseClassroomsResult {
    let classrooms = use_state(Vec::<Classroom>::new);
    let loading = use_state(|| true);
    let name = use_state(String::new);
    let name_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let classrooms = classrooms.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let classrooms = classrooms.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_classrooms().await {
                    Ok(list) => classrooms.set(list),
                    Err(e) => Logger::error_with_component(
                        "classrooms",
                        &format!("Failed to fetch classrooms: {}", e),
                    ),
                }
                loading.set(false);
            });
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let notifier = notifier.clone();
        let name = name.clone();
        let name_error = name_error.clone();
        let submitting = submitting.clone();
        let refresh = refresh.clone();

        Callback::from(move |_| {
            if let Err(e) = require("Classroom Name", &name) {
                name_error.set(Some(e.to_string()));
                return;
            }
            name_error.set(None);
            submitting.set(true);

            let classroom = Classroom {
                classroom_id: 0,
                classroom_name: (*name).clone(),
            };

            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let name = name.clone();
            let submitting = submitting.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.create_classroom(&classroom).await {
                    Ok(()) => {
                        notifier.success("Classroom added successfully!");
                        name.set(String::new());
                        refresh.emit(());
                    }
                    Err(_) => {
                        // Name uniqueness is server-enforced.
                        notifier.error("Class already exists");
                    }
                }
                submitting.set(false);
            });
        })
    };

    let delete = {
        let api_client = api_client.clone();
        let notifier = notifier.clone();
        let refresh = refresh.clone();

        Callback::from(move |classroom_id: i64| {
            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.delete_classroom(classroom_id).await {
                    Ok(()) => {
                        notifier.success("Classroom deleted successfully!");
                        // Refresh only on success; a rejected delete must
                        // leave the row in place.
                        refresh.emit(());
                    }
                    Err(_) => {
                        notifier.warning("Cant delete classroom with student");
                    }
                }
            });
        })
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = ClassroomsState {
        classrooms: (*classrooms).clone(),
        loading: *loading,
        name: (*name).clone(),
        name_error: (*name_error).clone(),
        submitting: *submitting,
    };

    let actions = UseClassroomsActions {
        refresh,
        submit,
        delete,
        on_name_change,
    };

    UseClassroomsResult { state, actions }
}
