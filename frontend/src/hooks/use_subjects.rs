use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::Subject;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::notify::Notifier;
use crate::services::validation::require;

#[derive(Clone, PartialEq)]
pub struct SubjectsState {
    pub subjects: Vec<Subject>,
    pub loading: bool,
    pub name: String,
    pub name_error: Option<String>,
    pub submitting: bool,
}

#[derive(Clone)]
pub struct UseSubjectsActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub on_name_change: Callback<Event>,
}

pub struct UseSubjectsResult {
    pub state: SubjectsState,
    pub actions: UseSubjectsActions,
}

#[hook]
pub fn use_subjects(api_client: &ApiClient, notifier: Notifier) -> UseSubjectsResult {
    let subjects = use_state(Vec::<Subject>::new);
    let loading = use_state(|| true);
    let name = use_state(String::new);
    let name_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let subjects = subjects.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let subjects = subjects.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_subjects().await {
                    Ok(list) => subjects.set(list),
                    Err(e) => Logger::error_with_component(
                        "subjects",
                        &format!("Failed to fetch subjects: {}", e),
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
            if let Err(e) = require("Subject Name", &name) {
                name_error.set(Some(e.to_string()));
                return;
            }
            name_error.set(None);
            submitting.set(true);

            let subject = Subject {
                subject_id: 0,
                subject_name: (*name).clone(),
            };

            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let name = name.clone();
            let submitting = submitting.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.create_subject(&subject).await {
                    Ok(()) => {
                        notifier.success("Subject added successfully!");
                        name.set(String::new());
                        refresh.emit(());
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                submitting.set(false);
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

    let state = SubjectsState {
        subjects: (*subjects).clone(),
        loading: *loading,
        name: (*name).clone(),
        name_error: (*name_error).clone(),
        submitting: *submitting,
    };

    let actions = UseSubjectsActions {
        refresh,
        submit,
        on_name_change,
    };

    UseSubjectsResult { state, actions }
}
