//! The sign-up record and the account returned for it.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// One of the four inputs of the sign-up form.
///
/// Field names use the same spelling as the form's element ids, so
/// `"confirmPassword".parse::<SignUpField>()` works and anything outside
/// the four known names is rejected.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum SignUpField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl SignUpField {
    /// The element id, also used as the label's `for` target.
    pub fn id(&self) -> &'static str {
        (*self).into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email address",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// The HTML input type. The browser enforces the `email` pattern itself.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Name => "text",
            Self::Email => "email",
            Self::Password | Self::ConfirmPassword => "password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Enter your name",
            Self::Email => "you@example.com",
            Self::Password | Self::ConfirmPassword => "••••••••",
        }
    }
}

/// The in-progress contents of the sign-up form.
///
/// Every field starts out as an empty string. Updates never mutate a record
/// in place: [`SignUpForm::with_field`] hands back a new one.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    pub fn get(&self, field: SignUpField) -> &str {
        match field {
            SignUpField::Name => &self.name,
            SignUpField::Email => &self.email,
            SignUpField::Password => &self.password,
            SignUpField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Returns a copy of this record with `field` replaced by `value`.
    pub fn with_field(&self, field: SignUpField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            SignUpField::Name => &mut next.name,
            SignUpField::Email => &mut next.email,
            SignUpField::Password => &mut next.password,
            SignUpField::ConfirmPassword => &mut next.confirm_password,
        };
        *slot = value.into();
        next
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

// Keeps passwords out of log lines.
impl fmt::Debug for SignUpForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &redacted(&self.password))
            .field("confirm_password", &redacted(&self.confirm_password))
            .finish()
    }
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

/// The account created by a successful signup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}
