use crate::components::pico::Card;
use crate::hooks::use_user_store;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn HomeScreen() -> Element {
    let store = use_user_store();
    let user = store.user.cloned();

    rsx! {
        Card {
            match user {
                Some(user) => rsx! {
                    h2 { "Welcome, {user.name}" }
                    p { "Signed in as {user.email}." }
                },
                None => rsx! {
                    h2 { "Welcome" }
                    p {
                        "You are not signed in. "
                        Link {
                            to: Route::SignUpScreen {},
                            "Create an account"
                        }
                    }
                },
            }
        }
    }
}
