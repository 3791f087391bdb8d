use thiserror::Error;

/// An error reported by the account store or the account service.
#[derive(Error, Debug)]
pub enum AccountError {
    /// The password and its confirmation differ. Checked before any request is sent.
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// The service answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request could not be sent or its response could not be read.
    #[error("failed to reach the account service: {0}")]
    Transport(#[from] reqwest::Error),
}
