//! This crate contains the types shared between the sign-up UI and the
//! account service, plus the client used to reach that service.

pub mod account;
pub mod backend;
pub mod config;
pub mod error;

pub use account::SignUpField;
pub use account::SignUpForm;
pub use account::User;
pub use backend::AccountBackend;
pub use backend::HttpAccountBackend;
pub use config::AccountApiConfig;
pub use error::AccountError;
