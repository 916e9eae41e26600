use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::admin::errors::StoreError;
use crate::admin::models::OrgId;
use crate::admin::models::Organization;
use crate::admin::ports::OrganizationDirectory;

pub struct PostgresOrganizationDirectory {
    pool: PgPool,
}

impl PostgresOrganizationDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganizationDirectory for PostgresOrganizationDirectory {
    async fn list_active(&self, limit: i64) -> Result<Vec<Organization>, StoreError> {
        // Ordered by id so the tenant scan is deterministic across calls.
        let rows = sqlx::query(
            r#"
            SELECT id, collection_name, deleted, created_at
            FROM organizations
            WHERE deleted = FALSE
            ORDER BY id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        rows.into_iter()
            .map(|row| {
                Ok(Organization {
                    id: OrgId(row.try_get::<Uuid, _>("id").map_err(db_err)?),
                    collection_name: row.try_get("collection_name").map_err(db_err)?,
                    deleted: row.try_get("deleted").map_err(db_err)?,
                    created_at: row
                        .try_get::<DateTime<Utc>, _>("created_at")
                        .map_err(db_err)?,
                })
            })
            .collect()
    }
}

fn db_err(e: sqlx::Error) -> StoreError {
    StoreError::Database(e.to_string())
}
