//! Postgres-backed user store.

use crate::error::StoreError;
use crate::models::User;
use crate::stores::{NewUser, UserMetadataKey, UserPatch, UserStore};
use async_trait::async_trait;
use photark_auth::PasswordHasher;
use photark_core::UserId;
use sqlx::PgPool;
use uuid::Uuid;

/// Base SELECT joining the stored preferences patch onto the user row.
const SELECT_USER: &str = "SELECT u.*, COALESCE(m.value, '{}'::jsonb) AS preferences_patch \
     FROM users u \
     LEFT JOIN user_metadata m ON m.user_id = u.id AND m.key = 'preferences'";

/// Translate a unique violation on the email index into the conflict
/// variant; every other failure stays a database error.
fn conflict_on_unique(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::EmailConflict,
        other => StoreError::Database(other),
    }
}

/// User persistence on Postgres.
///
/// Passwords are hashed with Argon2id before they reach a query; plaintext
/// never leaves this store.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
    hasher: PasswordHasher,
}

impl PgUserStore {
    /// Create a new user store.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            hasher: PasswordHasher::default(),
        }
    }

    async fn fetch(&self, id: Uuid, with_deleted: bool) -> Result<Option<User>, StoreError> {
        let mut sql = format!("{SELECT_USER} WHERE u.id = $1");
        if !with_deleted {
            sql.push_str(" AND u.deleted_at IS NULL");
        }

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn get(&self, id: UserId, with_deleted: bool) -> Result<Option<User>, StoreError> {
        self.fetch(*id.as_uuid(), with_deleted).await
    }

    async fn list(&self, with_deleted: bool) -> Result<Vec<User>, StoreError> {
        let mut sql = String::from(SELECT_USER);
        if !with_deleted {
            sql.push_str(" WHERE u.deleted_at IS NULL");
        }
        sql.push_str(" ORDER BY u.created_at DESC");

        let users = sqlx::query_as::<_, User>(&sql).fetch_all(&self.pool).await?;
        Ok(users)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let email = new_user.email.trim().to_lowercase();

        let password_hash = self.hasher.hash(&new_user.password)?;

        let now = chrono::Utc::now();

        // Uniqueness is enforced by the email index; concurrent duplicates
        // surface as a unique violation and map to the conflict error.
        let id: Uuid = sqlx::query_scalar(
            r"
            INSERT INTO users (email, password, name, quota_size_in_bytes, should_change_password, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, 'active', $6, $6)
            RETURNING id
            ",
        )
        .bind(&email)
        .bind(&password_hash)
        .bind(&new_user.name)
        .bind(new_user.quota_size_in_bytes)
        .bind(new_user.should_change_password)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(conflict_on_unique)?;

        tracing::info!(user_id = %id, "User created");
        tracing::debug!(user_id = %id, email = %email, "Created user email");

        // Re-read through the metadata join for the authoritative row
        self.fetch(id, true).await?.ok_or_else(|| {
            StoreError::Database(sqlx::Error::RowNotFound)
        })
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError> {
        let user_id = *id.as_uuid();

        // Hash a new password outside the transaction
        let password_hash = match &patch.password {
            Some(plaintext) => Some(self.hasher.hash(plaintext)?),
            None => None,
        };

        let email = patch.email.as_ref().map(|e| e.trim().to_lowercase());

        let mut tx = self.pool.begin().await?;

        // Lock the row so concurrent patches serialize
        let existing: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM users WHERE id = $1 FOR UPDATE")
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_none() {
            return Err(StoreError::Database(sqlx::Error::RowNotFound));
        }

        let now = chrono::Utc::now();

        // Build the UPDATE dynamically; parameters are bound in clause order.
        let mut sql = String::from("UPDATE users SET updated_at = $1");
        let mut param_idx: usize = 2;

        if email.is_some() {
            sql.push_str(&format!(", email = ${param_idx}"));
            param_idx += 1;
        }
        if patch.name.is_some() {
            sql.push_str(&format!(", name = ${param_idx}"));
            param_idx += 1;
        }
        if password_hash.is_some() {
            sql.push_str(&format!(", password = ${param_idx}"));
            param_idx += 1;
        }
        if patch.is_admin.is_some() {
            sql.push_str(&format!(", is_admin = ${param_idx}"));
            param_idx += 1;
        }
        if patch.should_change_password.is_some() {
            sql.push_str(&format!(", should_change_password = ${param_idx}"));
            param_idx += 1;
        }
        if patch.quota_size_in_bytes.is_some() {
            sql.push_str(&format!(", quota_size_in_bytes = ${param_idx}"));
            param_idx += 1;
        }
        if patch.status.is_some() {
            sql.push_str(&format!(", status = ${param_idx}"));
            param_idx += 1;
        }
        if patch.deleted_at.is_some() {
            sql.push_str(&format!(", deleted_at = ${param_idx}"));
            param_idx += 1;
        }
        sql.push_str(&format!(" WHERE id = ${param_idx}"));

        let mut q = sqlx::query(&sql).bind(now);
        if let Some(ref new_email) = email {
            q = q.bind(new_email);
        }
        if let Some(ref name) = patch.name {
            q = q.bind(name);
        }
        if let Some(ref hash) = password_hash {
            q = q.bind(hash);
        }
        if let Some(is_admin) = patch.is_admin {
            q = q.bind(is_admin);
        }
        if let Some(should_change_password) = patch.should_change_password {
            q = q.bind(should_change_password);
        }
        if let Some(quota) = patch.quota_size_in_bytes {
            q = q.bind(quota);
        }
        if let Some(status) = patch.status {
            q = q.bind(status);
        }
        if let Some(deleted_at) = patch.deleted_at {
            q = q.bind(deleted_at);
        }
        q = q.bind(user_id);

        // An email change racing another account with the same address hits
        // the unique index here.
        q.execute(&mut *tx).await.map_err(conflict_on_unique)?;
        tx.commit().await?;

        tracing::info!(user_id = %id, "User updated");

        self.fetch(user_id, true)
            .await?
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))
    }

    async fn upsert_metadata(
        &self,
        id: UserId,
        key: UserMetadataKey,
        value: serde_json::Value,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r"
            INSERT INTO user_metadata (user_id, key, value)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, key) DO UPDATE SET value = EXCLUDED.value
            ",
        )
        .bind(id.as_uuid())
        .bind(key.as_str())
        .bind(&value)
        .execute(&self.pool)
        .await?;

        tracing::debug!(user_id = %id, key = key.as_str(), "Upserted user metadata");
        Ok(())
    }

    async fn sync_usage(&self, id: UserId) -> Result<(), StoreError> {
        sqlx::query(
            r"
            UPDATE users
            SET quota_usage_in_bytes = COALESCE(
                    (SELECT SUM(a.file_size_in_bytes)
                     FROM assets a
                     WHERE a.owner_id = users.id AND a.deleted_at IS NULL),
                    0),
                updated_at = $2
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .bind(chrono::Utc::now())
        .execute(&self.pool)
        .await?;

        tracing::debug!(user_id = %id, "Synced storage usage");
        Ok(())
    }
}
