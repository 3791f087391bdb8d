//! Where the account service lives.

use std::env;

pub const DEFAULT_ACCOUNT_API_URL: &str = "http://localhost:5000";

const SIGNUP_PATH: &str = "/api/auth/signup";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountApiConfig {
    base_url: String,
}

impl AccountApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads the service location from the environment.
    ///
    /// # Environment Variables
    /// - `ACCOUNT_API_URL`: base URL of the account service. Read at runtime on
    ///   native targets; browsers have no process environment, so the value
    ///   baked in at compile time is used there.
    ///
    /// Falls back to [`DEFAULT_ACCOUNT_API_URL`].
    pub fn from_env() -> Self {
        let url = env::var("ACCOUNT_API_URL")
            .ok()
            .or_else(|| option_env!("ACCOUNT_API_URL").map(str::to_string))
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ACCOUNT_API_URL.to_string());
        Self::new(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn signup_url(&self) -> String {
        format!("{}{}", self.base_url, SIGNUP_PATH)
    }
}

impl Default for AccountApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ACCOUNT_API_URL)
    }
}
