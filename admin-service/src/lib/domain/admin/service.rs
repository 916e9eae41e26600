use std::sync::Arc;

use async_trait::async_trait;
use auth::AdminClaims;

use crate::admin::errors::AuthError;
use crate::admin::models::IssuedToken;
use crate::admin::models::LoginCommand;
use crate::admin::ports::AdminStore;
use crate::admin::ports::AuthServicePort;
use crate::admin::ports::CredentialVerifier;
use crate::admin::ports::OrganizationDirectory;
use crate::admin::ports::TokenIssuer;

/// Authentication resolver.
///
/// Scans the tenant directory in order, pins the tenant at the first store
/// containing the login email, then verifies the password and issues a
/// scoped token. All capabilities are injected; the resolver holds no
/// mutable state of its own.
pub struct AuthService<D, S, V, I>
where
    D: OrganizationDirectory,
    S: AdminStore,
    V: CredentialVerifier,
    I: TokenIssuer,
{
    directory: Arc<D>,
    admins: Arc<S>,
    verifier: Arc<V>,
    issuer: Arc<I>,
    org_scan_limit: i64,
    token_expiration_hours: i64,
}

impl<D, S, V, I> AuthService<D, S, V, I>
where
    D: OrganizationDirectory,
    S: AdminStore,
    V: CredentialVerifier,
    I: TokenIssuer,
{
    /// Create a new authentication service with injected capabilities.
    ///
    /// # Arguments
    /// * `directory` - Tenant directory implementation
    /// * `admins` - Namespaced admin store implementation
    /// * `verifier` - Password verification implementation
    /// * `issuer` - Token signing implementation
    /// * `org_scan_limit` - Upper bound on directory entries scanned per login
    /// * `token_expiration_hours` - Lifetime of issued tokens
    pub fn new(
        directory: Arc<D>,
        admins: Arc<S>,
        verifier: Arc<V>,
        issuer: Arc<I>,
        org_scan_limit: i64,
        token_expiration_hours: i64,
    ) -> Self {
        Self {
            directory,
            admins,
            verifier,
            issuer,
            org_scan_limit,
            token_expiration_hours,
        }
    }
}

#[async_trait]
impl<D, S, V, I> AuthServicePort for AuthService<D, S, V, I>
where
    D: OrganizationDirectory,
    S: AdminStore,
    V: CredentialVerifier,
    I: TokenIssuer,
{
    async fn authenticate(&self, command: LoginCommand) -> Result<IssuedToken, AuthError> {
        let organizations = self.directory.list_active(self.org_scan_limit).await?;

        for org in organizations {
            let admin = self
                .admins
                .find_by_email(&org.collection_name, command.email.as_str())
                .await?;

            let Some(admin) = admin else {
                continue;
            };

            // The first organization whose store contains this email pins
            // the tenant: the scan never falls through to later tenants,
            // whatever the checks below decide.
            let password_matches = self
                .verifier
                .verify(&command.password, &admin.password_hash)?;

            if !password_matches {
                return Err(AuthError::InvalidCredentials);
            }

            if admin.organization_id != org.id {
                tracing::warn!(
                    admin_id = %admin.id,
                    found_in = %org.id,
                    owned_by = %admin.organization_id,
                    "Admin record found under a namespace it does not belong to"
                );
                return Err(AuthError::OrganizationMismatch);
            }

            let claims = AdminClaims::for_admin(
                admin.id,
                org.id,
                admin.email.as_str(),
                self.token_expiration_hours,
            );
            let access_token = self.issuer.sign(&claims)?;

            tracing::info!(
                admin_id = %admin.id,
                organization_id = %org.id,
                "Admin authenticated"
            );

            return Ok(IssuedToken::bearer(access_token, admin.id, org.id));
        }

        // Identical to the wrong-password failure, so a caller cannot tell
        // an unknown account from a bad password.
        Err(AuthError::InvalidCredentials)
    }
}
