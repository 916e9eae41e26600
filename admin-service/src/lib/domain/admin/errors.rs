use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Infrastructure failure reading the organization directory or a tenant
/// admin store. Distinct from "not found", which the store reports as `None`.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for admin authentication.
///
/// `InvalidCredentials` deliberately covers wrong password and unknown email
/// with a single message, so callers cannot probe which accounts exist.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Admin organization mismatch")]
    OrganizationMismatch,

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Infrastructure errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Credential verifier error: {0}")]
    Verifier(#[from] auth::PasswordError),

    #[error("Token signing error: {0}")]
    Signing(#[from] auth::SigningError),
}
