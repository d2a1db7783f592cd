use yew::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class="navbar">
            <div class="container">
                <span class="navbar-brand">{"School Admin"}</span>
                <ul class="navbar-links">
                    {for Route::ALL.iter().map(|route| {
                        let route = *route;
                        let on_navigate = props.on_navigate.clone();
                        let onclick = Callback::from(move |_| on_navigate.emit(route));
                        let class = if props.current == route {
                            "nav-link active"
                        } else {
                            "nav-link"
                        };
                        html! {
                            <li>
                                <button type="button" {class} {onclick}>
                                    {route.label()}
                                </button>
                            </li>
                        }
                    })}
                </ul>
            </div>
        </nav>
    }
}
