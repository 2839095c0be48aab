use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod dom;
mod error;
mod login;
mod menu;
mod theme;
mod viewport;
mod components {
    pub mod navbar;
}
mod pages {
    pub mod home;
    pub mod login;
}

use pages::{home::HomePage, login::LoginPage};
use theme::ThemeHandle;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <HomePage /> }
        }
        Route::Login => {
            info!("Rendering Login page");
            html! { <LoginPage /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Lives for the whole app so a theme chosen this session survives
    // navigating away from the landing page and back.
    let theme = use_memo(|_| ThemeHandle::browser(), ());

    html! {
        <ContextProvider<ThemeHandle> context={(*theme).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ThemeHandle>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
