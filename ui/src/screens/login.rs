use crate::components::pico::Card;
use crate::Route;
use dioxus::prelude::*;

/// Landing spot for the "Login here" link. Logging in itself is done by the
/// account service.
#[component]
pub fn LoginScreen() -> Element {
    rsx! {
        Card {
            h2 { "Log in" }
            p { "Sign in with the account you created." }
            p {
                "Need an account? "
                Link {
                    to: Route::SignUpScreen {},
                    "Sign up"
                }
            }
        }
    }
}
