use auth::AdminClaims;
use auth::SigningError;
use auth::TokenSigner;

use crate::admin::ports::TokenIssuer;

/// Token issuer backed by the auth library's HS256 signer.
pub struct JwtTokenIssuer {
    signer: TokenSigner,
}

impl JwtTokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            signer: TokenSigner::new(secret),
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn sign(&self, claims: &AdminClaims) -> Result<String, SigningError> {
        self.signer.sign(claims)
    }
}
