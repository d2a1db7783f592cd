use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::snackbar::Snackbar;
use crate::hooks::use_auth::use_auth;
use crate::pages::allocate_classrooms::AllocateClassroomsPage;
use crate::pages::allocate_subjects::AllocateSubjectsPage;
use crate::pages::classrooms::ClassroomsPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::student_report::StudentReportPage;
use crate::pages::students::StudentsPage;
use crate::pages::subjects::SubjectsPage;
use crate::pages::teachers::TeachersPage;
use crate::services::api::ApiClient;
use crate::services::notify::{use_notifier, Notification, Notifier};

/// The admin screens. Navigation is in-app state; no URL routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Students,
    Classrooms,
    Teachers,
    Subjects,
    AllocateSubjects,
    AllocateClassrooms,
    StudentReport,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Students,
        Route::Classrooms,
        Route::Teachers,
        Route::Subjects,
        Route::AllocateSubjects,
        Route::AllocateClassrooms,
        Route::StudentReport,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Students => "Students",
            Route::Classrooms => "Classrooms",
            Route::Teachers => "Teachers",
            Route::Subjects => "Subjects",
            Route::AllocateSubjects => "Allocate Subjects",
            Route::AllocateClassrooms => "Allocate Classrooms",
            Route::StudentReport => "Student Report",
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let notification = use_state(|| Option::<Notification>::None);
    let notifier = Notifier::new(notification.clone());

    html! {
        <ContextProvider<Notifier> context={notifier}>
            <Shell />
        </ContextProvider<Notifier>>
    }
}

/// Everything below the notifier context: the login gate, the navbar,
/// and the current page.
#[function_component(Shell)]
fn shell() -> Html {
    let api_client = use_state(ApiClient::new);
    let route = use_state(|| Route::Home);
    let notifier = use_notifier();
    let auth = use_auth(&api_client, notifier.clone());

    // Land on Home after a successful login.
    use_effect_with(auth.state.authenticated, {
        let route = route.clone();
        move |authenticated| {
            if *authenticated {
                route.set(Route::Home);
            }
            || ()
        }
    });

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| route.set(next))
    };

    let body = if !auth.state.authenticated {
        html! {
            <LoginPage auth={auth.state.clone()} on_login={auth.actions.login.clone()} />
        }
    } else {
        let api_client = (*api_client).clone();
        match *route {
            Route::Home => html! { <HomePage on_navigate={on_navigate.clone()} /> },
            Route::Students => html! { <StudentsPage {api_client} /> },
            Route::Classrooms => html! { <ClassroomsPage {api_client} /> },
            Route::Teachers => html! { <TeachersPage {api_client} /> },
            Route::Subjects => html! { <SubjectsPage {api_client} /> },
            Route::AllocateSubjects => html! { <AllocateSubjectsPage {api_client} /> },
            Route::AllocateClassrooms => html! { <AllocateClassroomsPage {api_client} /> },
            Route::StudentReport => html! { <StudentReportPage {api_client} /> },
        }
    };

    html! {
        <div class="app">
            {if auth.state.authenticated {
                html! { <Navbar current={*route} on_navigate={on_navigate} /> }
            } else {
                html! {}
            }}
            <main class="content">
                {body}
            </main>
            <Snackbar notification={notifier.current()} />
        </div>
    }
}
