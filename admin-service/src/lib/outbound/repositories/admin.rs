use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::admin::errors::StoreError;
use crate::admin::models::Admin;
use crate::admin::models::AdminId;
use crate::admin::models::EmailAddress;
use crate::admin::models::OrgId;
use crate::admin::ports::AdminStore;

/// Namespaced admin credential store.
///
/// All tenants share one `admins` table; the `namespace` column carries the
/// owning organization's collection name and scopes every lookup.
pub struct PostgresAdminStore {
    pool: PgPool,
}

impl PostgresAdminStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn admin_from_row(row: PgRow) -> Result<Admin, StoreError> {
        let email: String = row.try_get("email").map_err(db_err)?;

        Ok(Admin {
            id: AdminId(row.try_get::<Uuid, _>("id").map_err(db_err)?),
            email: EmailAddress::new(email)
                .map_err(|e| StoreError::Database(format!("Corrupt admin row: {}", e)))?,
            password_hash: row.try_get("password_hash").map_err(db_err)?,
            organization_id: OrgId(row.try_get::<Uuid, _>("organization_id").map_err(db_err)?),
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_err)?,
        })
    }
}

#[async_trait]
impl AdminStore for PostgresAdminStore {
    async fn find_by_email(
        &self,
        namespace: &str,
        email: &str,
    ) -> Result<Option<Admin>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, organization_id, created_at
            FROM admins
            WHERE namespace = $1 AND email = $2
            "#,
        )
        .bind(namespace)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(Self::admin_from_row).transpose()
    }
}

fn db_err(e: sqlx::Error) -> StoreError {
    StoreError::Database(e.to_string())
}
