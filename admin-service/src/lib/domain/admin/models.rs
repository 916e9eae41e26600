use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::admin::errors::EmailError;

/// Organization (tenant) directory entry.
///
/// Created and administered outside this service; authentication only reads
/// non-deleted entries. `collection_name` is the namespace key selecting the
/// organization's isolated admin store.
#[derive(Debug, Clone)]
pub struct Organization {
    pub id: OrgId,
    pub collection_name: String,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

/// Admin credential record, owned entirely by one tenant's store.
///
/// `organization_id` must equal the id of the organization whose namespace
/// the record was found under; authentication rejects records where the two
/// disagree.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: AdminId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub organization_id: OrgId,
    pub created_at: DateTime<Utc>,
}

/// Organization unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrgId(pub Uuid);

impl OrgId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Admin unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdminId(pub Uuid);

impl AdminId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates format using an RFC 5322 compliant parser. The address is kept
/// exactly as given; lookups are case-sensitive against the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to authenticate an admin.
///
/// The password is plaintext and transient; it is never persisted or logged.
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}

// Hand-written so the plaintext password can never leak through `{:?}`.
impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a successful authentication.
///
/// Produced once per login; the service keeps no copy.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
    pub admin_id: AdminId,
    pub organization_id: OrgId,
}

impl IssuedToken {
    pub fn bearer(access_token: String, admin_id: AdminId, organization_id: OrgId) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            admin_id,
            organization_id,
        }
    }
}
