use thiserror::Error;

/// Error type for token signing and validation.
#[derive(Debug, Clone, Error)]
pub enum SigningError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,
}
