use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::SigningError;

/// Access token signer and validator.
///
/// Generic over the claims type so callers define their own payload.
/// Uses HS256 (HMAC with SHA-256).
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenSigner {
    /// Create a signer from a shared secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token string.
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn sign<T: Serialize>(&self, claims: &T) -> Result<String, SigningError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| SigningError::SigningFailed(e.to_string()))
    }

    /// Decode a token, validating signature and expiration.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` claim is in the past
    /// * `DecodingFailed` - signature invalid or token malformed
    pub fn verify<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, SigningError> {
        let validation = Validation::new(self.algorithm);

        let token_data = decode::<T>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => SigningError::TokenExpired,
                _ => SigningError::DecodingFailed(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }
}
