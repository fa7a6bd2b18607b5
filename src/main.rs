use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod components {
    pub mod chatbot;
    pub mod document_card;
    pub mod footer;
    pub mod header;
    pub mod service_card;
    pub mod stats_counter;
}
mod pages {
    pub mod account;
    pub mod landing;
}
mod auth {
    pub mod login;
    pub mod signup;
}

use components::header::Header;
use pages::{
    account::{LoginPage, SignupPage},
    landing::Landing,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    Signup,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Signup => {
            info!("Rendering Signup page");
            html! { <SignupPage /> }
        }
        Route::Login => {
            info!("Rendering Login page");
            html! { <LoginPage /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="auth-container">
                    <div class="not-found">
                        <h2>{"Page introuvable"}</h2>
                        <Link<Route> to={Route::Home} classes="btn btn-primary">
                            {"Retour à l'accueil"}
                        </Link<Route>>
                    </div>
                </div>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("Logger already initialized:", e.to_string());
    }

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Signup.to_path(), "/signup");
        assert_eq!(Route::Login.to_path(), "/login");
    }
}
