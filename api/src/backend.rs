//! Defines the trait for the service that creates accounts, and the HTTP
//! implementation used by the app.

use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;

use crate::account::SignUpForm;
use crate::account::User;
use crate::config::AccountApiConfig;
use crate::error::AccountError;

/// Shown when the service rejects a signup without saying why.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// A trait for any service that can create an account from a sign-up record.
#[allow(async_fn_in_trait)]
pub trait AccountBackend {
    /// Creates the account. Called once per signup attempt; no retries.
    async fn signup(&self, form: &SignUpForm) -> Result<User, AccountError>;
}

/// The JSON body sent to the service. The password confirmation is a
/// client-side concern and is not transmitted.
#[derive(Serialize, Debug, PartialEq, Eq)]
struct SignupPayload<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

impl<'a> From<&'a SignUpForm> for SignupPayload<'a> {
    fn from(form: &'a SignUpForm) -> Self {
        Self {
            name: &form.name,
            email: &form.email,
            password: &form.password,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Builds the error for a non-success response from its status and raw body.
pub fn rejection(status: u16, body: &str) -> AccountError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
    AccountError::Rejected { status, message }
}

/// Talks to the account service over HTTP.
#[derive(Clone, Debug)]
pub struct HttpAccountBackend {
    config: AccountApiConfig,
    client: reqwest::Client,
}

impl HttpAccountBackend {
    pub fn new(config: AccountApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &AccountApiConfig {
        &self.config
    }
}

impl AccountBackend for HttpAccountBackend {
    async fn signup(&self, form: &SignUpForm) -> Result<User, AccountError> {
        let url = self.config.signup_url();
        info!("signup request for {} to {}", form.email, url);

        let resp = self
            .client
            .post(&url)
            .json(&SignupPayload::from(form))
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            let user = resp.json::<User>().await?;
            info!("account created for {}", user.email);
            return Ok(user);
        }

        let body = resp.text().await.unwrap_or_default();
        let error = rejection(status.as_u16(), &body);
        warn!("signup rejected with status {}: {}", status, error);
        Err(error)
    }
}
