use crate::components::toaster::Toaster;
use crate::routes::{MainRoute, switch};
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// Router shell. The session is already restored by the time the first
/// route is matched, so there is no loading state to wait through.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
            <Toaster />
        </BrowserRouter>
    }
}
