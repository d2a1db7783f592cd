use yew::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<Route>,
}

const CARDS: [(Route, &str); 7] = [
    (Route::Students, "Register students and keep their details current."),
    (Route::Classrooms, "Maintain the list of classrooms."),
    (Route::Teachers, "Register teachers and their contact details."),
    (Route::Subjects, "Maintain the list of subjects."),
    (Route::AllocateSubjects, "Assign subjects to a teacher."),
    (Route::AllocateClassrooms, "Assign classrooms to a teacher."),
    (Route::StudentReport, "View a student's details and their teachers."),
];

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    html! {
        <div class="page home-page">
            <h2>{"School Management"}</h2>
            <div class="card-grid">
                {for CARDS.iter().map(|(route, blurb)| {
                    let route = *route;
                    let on_navigate = props.on_navigate.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(route));
                    html! {
                        <div class="card" {onclick}>
                            <h3>{route.label()}</h3>
                            <p>{*blurb}</p>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
