use crate::router::Route;

use yew::prelude::*;

pub fn switch(routes: Route) -> Html {
    use crate::components::*;

    match routes {
        Route::NotFound => html! {<h1>{"not found 404"}</h1>},
        // the login form is the only page, the root serves it as well
        Route::Home => html! { <Login/> },
        Route::Login => html! { <Login/> },
    }
}
