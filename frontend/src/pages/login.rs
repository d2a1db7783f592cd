use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::LoginRequest;

use crate::hooks::use_auth::AuthState;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub auth: AuthState,
    pub on_login: Callback<LoginRequest>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_login.emit(LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
            });
        })
    };

    html! {
        <div class="page login-page">
            <h2>{"Login"}</h2>
            <form class="entity-form" {onsubmit}>
                <div class="form-group">
                    <label for="username">{"Username"}</label>
                    <input
                        type="text"
                        id="username"
                        value={(*username).clone()}
                        onchange={on_username_change}
                        disabled={props.auth.submitting}
                    />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        value={(*password).clone()}
                        onchange={on_password_change}
                        disabled={props.auth.submitting}
                    />
                </div>
                {if let Some(error) = &props.auth.login_error {
                    html! { <div class="field-error">{error}</div> }
                } else {
                    html! {}
                }}
                <div class="form-buttons">
                    <button type="submit" class="btn btn-primary" disabled={props.auth.submitting}>
                        {"Login"}
                    </button>
                </div>
            </form>
        </div>
    }
}
