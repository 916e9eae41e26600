use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set embedded in an admin access token.
///
/// `sub` duplicates `admin_id` so the token stays compatible with generic
/// RFC 7519 consumers that only look at the subject claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminClaims {
    /// Subject (same value as `admin_id`)
    pub sub: String,

    /// Authenticated admin identifier
    pub admin_id: String,

    /// Organization the admin authenticated against
    pub organization_id: String,

    /// Login email, as stored
    pub email: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl AdminClaims {
    /// Build the claim set for a freshly authenticated admin.
    ///
    /// # Arguments
    /// * `admin_id` - Admin identifier, becomes both `sub` and `admin_id`
    /// * `organization_id` - Owning organization identifier
    /// * `email` - Login email
    /// * `expiration_hours` - Hours until the token expires
    pub fn for_admin(
        admin_id: impl ToString,
        organization_id: impl ToString,
        email: impl ToString,
        expiration_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        let admin_id = admin_id.to_string();

        Self {
            sub: admin_id.clone(),
            admin_id,
            organization_id: organization_id.to_string(),
            email: email.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Check whether the token is expired at the given instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
