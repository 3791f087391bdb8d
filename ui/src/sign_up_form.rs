//! The sign-up form controller.
//!
//! The form's contents live in a [`SignUpForm`] record that is replaced, never
//! edited, on each keystroke. Submitting hands a copy of the record to the
//! injected [`AccountStore`]; everything after that (validation against the
//! service, the loading flag, errors) belongs to the store.

use api::SignUpField;
use api::SignUpForm;
use dioxus_logger::tracing::debug;

use crate::user_store::AccountStore;

/// A fresh form with every field empty.
pub fn initialize() -> SignUpForm {
    SignUpForm::default()
}

/// Returns a new record equal to `form` except for `field`.
pub fn update_field(form: &SignUpForm, field: SignUpField, value: impl Into<String>) -> SignUpForm {
    form.with_field(field, value)
}

/// Like [`update_field`], for callers that only have the field's element id.
/// Unknown names are rejected and no record is produced.
pub fn update_field_named(
    form: &SignUpForm,
    name: &str,
    value: impl Into<String>,
) -> Result<SignUpForm, strum::ParseError> {
    let field = name.parse::<SignUpField>()?;
    Ok(update_field(form, field, value))
}

/// Fires one signup attempt with a copy of `form`.
///
/// Does not wait for the outcome and does not validate or clear the form.
pub fn submit<S: AccountStore + ?Sized>(store: &S, form: &SignUpForm) {
    debug!("submitting sign-up form for {}", form.email);
    store.signup(form.clone());
}

/// Where a single signup attempt stands, as seen by the form.
///
/// The store drives both transitions through its loading flag.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmitPhase {
    pub fn from_loading(loading: bool) -> Self {
        if loading {
            Self::Submitting
        } else {
            Self::Idle
        }
    }
}

/// How the submit button should look for a given phase.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SubmitControl {
    pub disabled: bool,
    pub busy: bool,
    pub label: &'static str,
}

impl SubmitControl {
    pub fn for_phase(phase: SubmitPhase) -> Self {
        match phase {
            SubmitPhase::Idle => Self {
                disabled: false,
                busy: false,
                label: "Sign Up",
            },
            SubmitPhase::Submitting => Self {
                disabled: true,
                busy: true,
                label: "Loading...",
            },
        }
    }

    pub fn for_loading(loading: bool) -> Self {
        Self::for_phase(SubmitPhase::from_loading(loading))
    }
}
