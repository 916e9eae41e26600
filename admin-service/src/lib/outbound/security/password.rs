use auth::PasswordError;
use auth::PasswordHasher;

use crate::admin::ports::CredentialVerifier;

/// Credential verifier backed by the auth library's Argon2id implementation.
pub struct Argon2Verifier {
    hasher: PasswordHasher,
}

impl Argon2Verifier {
    pub fn new() -> Self {
        Self {
            hasher: PasswordHasher::new(),
        }
    }
}

impl Default for Argon2Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialVerifier for Argon2Verifier {
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        self.hasher.verify(password, hash)
    }
}
