//=============================================================================
// File: src/screens/sign_up.rs
//=============================================================================
use crate::components::pico::{Button, Card, LabeledInput};
use crate::hooks::use_user_store;
use crate::sign_up_form::{self, SubmitControl};
use crate::user_store::AccountStore;
use crate::Route;
use api::{SignUpField, SignUpForm};
use dioxus::prelude::*;
use strum::IntoEnumIterator;

/// One edit reported by the form: the field and its new contents.
#[derive(Clone, PartialEq, Debug)]
pub struct FieldInput {
    pub field: SignUpField,
    pub value: String,
}

/// Renders the four inputs and the submit button for `state`.
///
/// Holds no state of its own. Edits go out through `on_input`, and a
/// submission (after the browser's own required/email checks pass) goes
/// out through `on_submit` with the page navigation already suppressed.
#[component]
pub fn SignUpFormView(
    state: SignUpForm,
    loading: bool,
    on_input: EventHandler<FieldInput>,
    on_submit: EventHandler<()>,
) -> Element {
    let control = SubmitControl::for_loading(loading);

    rsx! {
        form {
            class: "signup-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                on_submit.call(());
            },
            for field in SignUpField::iter() {
                div {
                    key: "{field}",
                    class: "signup-field",
                    LabeledInput {
                        id: field.id(),
                        label: field.label(),
                        input_type: field.input_type(),
                        placeholder: field.placeholder(),
                        required: true,
                        value: state.get(field).to_string(),
                        on_input: move |value: String| on_input.call(FieldInput { field, value }),
                    }
                }
            }
            Button {
                submit: true,
                disabled: control.disabled,
                busy: control.busy,
                "{control.label}"
            }
        }
    }
}

#[component]
pub fn SignUpScreen() -> Element {
    let store = use_user_store();
    let navigator = use_navigator();
    let mut form = use_signal(sign_up_form::initialize);

    // A successful signup populates the store's user; leave the page then.
    use_effect(move || {
        if store.signed_in() {
            navigator.replace(Route::HomeScreen {});
        }
    });

    rsx! {
        div {
            class: "signup-screen",
            h2 { "Create your account" }
            Card {
                SignUpFormView {
                    state: form(),
                    loading: store.loading(),
                    on_input: move |input: FieldInput| {
                        let next = sign_up_form::update_field(&form.peek(), input.field, input.value);
                        form.set(next);
                    },
                    on_submit: move |_| sign_up_form::submit(&store, &form.peek()),
                }
                p {
                    class: "signup-login-hint",
                    "Already have an account? "
                    Link {
                        to: Route::LoginScreen {},
                        "Login here →"
                    }
                }
            }
        }
    }
}
