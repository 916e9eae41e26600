use async_trait::async_trait;

use auth::AdminClaims;
use auth::PasswordError;
use auth::SigningError;

use crate::admin::errors::AuthError;
use crate::admin::errors::StoreError;
use crate::admin::models::Admin;
use crate::admin::models::IssuedToken;
use crate::admin::models::LoginCommand;
use crate::admin::models::Organization;

/// Port for admin authentication.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Resolve a login to exactly one tenant and admin, and issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - no matching account, or wrong password
    /// * `OrganizationMismatch` - matched record owned by a different tenant
    /// * `Store` - directory or tenant store infrastructure failure
    /// * `Signing` - token issuance failure
    async fn authenticate(&self, command: LoginCommand) -> Result<IssuedToken, AuthError>;
}

/// Read access to the tenant directory.
#[async_trait]
pub trait OrganizationDirectory: Send + Sync + 'static {
    /// List up to `limit` non-deleted organizations.
    ///
    /// Ordering must be deterministic (stable by organization id) so that
    /// the first-match-wins tenant resolution is reproducible.
    ///
    /// # Errors
    /// * `Database` - directory read failed
    async fn list_active(&self, limit: i64) -> Result<Vec<Organization>, StoreError>;
}

/// Lookup into one tenant's isolated admin store.
#[async_trait]
pub trait AdminStore: Send + Sync + 'static {
    /// Find an admin credential record by login email within `namespace`.
    ///
    /// Returns `None` when the namespace has no record for this email;
    /// only infrastructure failures are errors.
    ///
    /// # Errors
    /// * `Database` - store read failed
    async fn find_by_email(
        &self,
        namespace: &str,
        email: &str,
    ) -> Result<Option<Admin>, StoreError>;
}

/// Opaque password check against a stored hash.
pub trait CredentialVerifier: Send + Sync + 'static {
    /// Check `password` against `hash`. A mismatch is `Ok(false)`; only a
    /// malformed stored hash is an error.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}

/// Opaque signed token issuance.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Encode the claim set into a signed, time-bounded token string.
    ///
    /// # Errors
    /// * `SigningFailed` - signing key or material unavailable
    fn sign(&self, claims: &AdminClaims) -> Result<String, SigningError>;
}
