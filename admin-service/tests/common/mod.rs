use std::collections::HashMap;
use std::sync::Arc;

use admin_service::admin::errors::StoreError;
use admin_service::admin::models::Admin;
use admin_service::admin::models::AdminId;
use admin_service::admin::models::EmailAddress;
use admin_service::admin::models::OrgId;
use admin_service::admin::models::Organization;
use admin_service::admin::ports::AdminStore;
use admin_service::admin::ports::OrganizationDirectory;
use admin_service::domain::admin::service::AuthService;
use admin_service::outbound::security::Argon2Verifier;
use admin_service::outbound::security::JwtTokenIssuer;
use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Directory backed by a plain vector, mirroring the deterministic
/// id-ordered listing the real directory provides.
pub struct InMemoryDirectory {
    organizations: Vec<Organization>,
}

impl InMemoryDirectory {
    pub fn new(organizations: Vec<Organization>) -> Self {
        Self { organizations }
    }
}

#[async_trait]
impl OrganizationDirectory for InMemoryDirectory {
    async fn list_active(&self, limit: i64) -> Result<Vec<Organization>, StoreError> {
        let mut active: Vec<Organization> = self
            .organizations
            .iter()
            .filter(|org| !org.deleted)
            .cloned()
            .collect();
        active.sort_by_key(|org| org.id.0);
        active.truncate(limit as usize);
        Ok(active)
    }
}

/// Admin store keyed by namespace, one isolated record set per tenant.
pub struct InMemoryAdminStore {
    admins: HashMap<String, Vec<Admin>>,
}

impl InMemoryAdminStore {
    pub fn new() -> Self {
        Self {
            admins: HashMap::new(),
        }
    }

    pub fn insert(&mut self, namespace: &str, admin: Admin) {
        self.admins
            .entry(namespace.to_string())
            .or_default()
            .push(admin);
    }
}

#[async_trait]
impl AdminStore for InMemoryAdminStore {
    async fn find_by_email(
        &self,
        namespace: &str,
        email: &str,
    ) -> Result<Option<Admin>, StoreError> {
        Ok(self
            .admins
            .get(namespace)
            .and_then(|records| records.iter().find(|a| a.email.as_str() == email))
            .cloned())
    }
}

pub fn organization(collection_name: &str) -> Organization {
    Organization {
        id: OrgId::new(),
        collection_name: collection_name.to_string(),
        deleted: false,
        created_at: Utc::now(),
    }
}

pub fn admin_with_password(org: &Organization, email: &str, password: &str) -> Admin {
    let password_hash = PasswordHasher::new()
        .hash(password)
        .expect("Failed to hash test password");

    Admin {
        id: AdminId::new(),
        email: EmailAddress::new(email.to_string()).expect("Invalid test email"),
        password_hash,
        organization_id: org.id,
        created_at: Utc::now(),
    }
}

pub type TestAuthService =
    AuthService<InMemoryDirectory, InMemoryAdminStore, Argon2Verifier, JwtTokenIssuer>;

pub fn auth_service(
    organizations: Vec<Organization>,
    store: InMemoryAdminStore,
    org_scan_limit: i64,
) -> TestAuthService {
    AuthService::new(
        Arc::new(InMemoryDirectory::new(organizations)),
        Arc::new(store),
        Arc::new(Argon2Verifier::new()),
        Arc::new(JwtTokenIssuer::new(TEST_JWT_SECRET)),
        org_scan_limit,
        24,
    )
}
