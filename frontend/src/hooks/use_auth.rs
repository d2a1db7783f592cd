use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::LoginRequest;

use crate::services::api::ApiClient;
use crate::services::notify::Notifier;

/// Process-local login gate. The flag is not derived from the issued
/// token and the token is not attached to later requests; this is a UI
/// gate, not a security boundary.
#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub authenticated: bool,
    pub login_error: Option<String>,
    pub submitting: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseAuthActions {
    pub login: Callback<LoginRequest>,
}

pub struct UseAuthResult {
    pub state: AuthState,
    pub actions: UseAuthActions,
}

#[hook]
pub fn use_auth(api_client: &ApiClient, notifier: Notifier) -> UseAuthResult {
    let authenticated = use_state(|| false);
    let login_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let login = {
        let api_client = api_client.clone();
        let notifier = notifier.clone();
        let authenticated = authenticated.clone();
        let login_error = login_error.clone();
        let submitting = submitting.clone();

        Callback::from(move |request: LoginRequest| {
            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let authenticated = authenticated.clone();
            let login_error = login_error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);
                match api_client.login(&request).await {
                    Ok(response) if !response.token.is_empty() => {
                        login_error.set(None);
                        notifier.success("Granted");
                        authenticated.set(true);
                    }
                    _ => {
                        login_error.set(Some("Invalid username or password".to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let state = AuthState {
        authenticated: *authenticated,
        login_error: (*login_error).clone(),
        submitting: *submitting,
    };

    let actions = UseAuthActions { login };

    UseAuthResult { state, actions }
}
