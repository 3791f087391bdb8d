// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
pub mod hooks;
mod screens;
pub mod sign_up_form;
pub mod user_store;

use api::AccountApiConfig;
use components::pico::Alert;
use components::pico::Container;
use hooks::use_user_store;
use screens::home::HomeScreen;
use screens::login::LoginScreen;
use screens::sign_up::SignUpScreen;
use user_store::use_user_store_provider;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// The app's pages.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        HomeScreen {},
        #[route("/signup")]
        SignUpScreen {},
        #[route("/login")]
        LoginScreen {},
}

/// Frame around every page: the store's error banner above the routed screen.
#[component]
fn AppShell() -> Element {
    let store = use_user_store();
    let error = store.error.cloned();

    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li {
                            Link { to: Route::HomeScreen {}, strong { "Accounts" } }
                        }
                    }
                    ul {
                        li { Link { to: Route::SignUpScreen {}, "Sign up" } }
                        li { Link { to: Route::LoginScreen {}, "Log in" } }
                    }
                }
            }
            if let Some(message) = error {
                Alert {
                    message,
                    on_dismiss: move |_| store.clear_error(),
                }
            }
            Outlet::<Route> {}
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    .signup-screen { max-width: 28rem; margin: 3rem auto 0; }
    .signup-screen h2 { text-align: center; }
    .signup-login-hint { margin-top: 2rem; margin-bottom: 0; text-align: center; font-size: 0.875rem; }
    .alert { border-left: 4px solid var(--pico-del-color); display: flex; justify-content: space-between; }
    .alert p { margin: 0; }
"#;

    // The store lives above the router so a signup survives page changes.
    use_user_store_provider(AccountApiConfig::from_env);

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{app_css}"
        }
        Router::<Route> {}
    }
}
