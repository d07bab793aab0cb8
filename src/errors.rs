use thiserror::Error;

/// Failures from the remote post collection.
///
/// Slices store the rendered message, never the structured value, so the
/// `Display` strings are what users end up seeing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("post not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Unavailable(String),
}

/// Failures from the identity provider and the sign-up precheck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Email already in use")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{0}")]
    Unavailable(String),
}
